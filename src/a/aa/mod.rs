pub mod aaa;
pub mod aaa2;
pub mod aab;
