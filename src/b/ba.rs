use crate::unit::Unit;
use crate::utils::error::Result;
use std::io::Write;

/// Target of the optional cross-tree wiring from `a::aa`.
pub struct Ba;

impl Unit for Ba {
    fn label() -> &'static str {
        "BA"
    }

    fn print(out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", Self::label())?;
        Ok(())
    }
}
