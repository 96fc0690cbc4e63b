// The `a` subtree is always compiled; only its wiring to `b` is optional.

pub mod aa;
pub mod ab;
