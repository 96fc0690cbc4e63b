use crate::a::aa::aab::Aab;
use crate::a::ab::aba::Aba;
#[cfg(feature = "use-b-ba")]
use crate::b::ba::Ba;
use crate::unit::Unit;
use crate::utils::error::Result;
use std::io::Write;

/// Root of the unit tree. Forwards into both `a` branches, then across to
/// `b::ba` when that subtree is compiled in.
pub struct Aaa;

impl Unit for Aaa {
    fn label() -> &'static str {
        "AAA"
    }

    fn print(out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", Self::label())?;
        Aba::print(out)?;
        Aab::print(out)?;

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

/// Square root via the standard library. Negative inputs propagate the
/// standard library's domain behavior (NaN) unchanged.
pub fn my_sqrt(n: f64) -> f64 {
    n.sqrt()
}
