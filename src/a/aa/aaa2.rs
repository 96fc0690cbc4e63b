#[cfg(feature = "use-b-ba")]
use crate::b::ba::Ba;
use crate::unit::Unit;
use crate::utils::error::Result;
use std::io::Write;

/// Secondary entry point. Skips the `a` branches and exercises only the
/// optional wiring into `b::ba`.
pub struct Aaa2;

impl Unit for Aaa2 {
    fn label() -> &'static str {
        "AAA2"
    }

    fn print(out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", Self::label())?;

        #[cfg(feature = "use-b-ba")]
        {
            writeln!(out, "BA is used within {}", Self::label())?;
            Ba::print(out)?;
        }
        #[cfg(not(feature = "use-b-ba"))]
        writeln!(out, "BA is not used within {}", Self::label())?;

        Ok(())
    }
}
