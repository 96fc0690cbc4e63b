use crate::unit::Unit;
use crate::utils::error::Result;
use std::io::Write;

pub struct Aba;

impl Unit for Aba {
    fn label() -> &'static str {
        "ABA"
    }

    fn print(out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", Self::label())?;
        Ok(())
    }
}
