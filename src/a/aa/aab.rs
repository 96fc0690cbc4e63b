use crate::unit::Unit;
use crate::utils::error::Result;
use std::io::Write;

pub struct Aab;

impl Unit for Aab {
    fn label() -> &'static str {
        "AAB"
    }

    fn print(out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", Self::label())?;
        Ok(())
    }
}
