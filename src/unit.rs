use crate::utils::error::Result;
use std::io::Write;

/// A compiled-in stub in the unit tree. Printing writes the unit's label as
/// one line and then the output of every unit it is wired to, so the sink
/// receives a deterministic trace of the build's wiring.
pub trait Unit {
    fn label() -> &'static str;

    fn print(out: &mut dyn Write) -> Result<()>;
}
