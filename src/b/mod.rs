// Compiled only when the `use-b-ba` feature is enabled (see lib.rs).

pub mod ba;
