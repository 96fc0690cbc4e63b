pub mod aba;
