use crate::a::aa::aaa::Aaa;
use crate::a::aa::aaa2::Aaa2;
use crate::a::aa::aab::Aab;
use crate::a::ab::aba::Aba;
#[cfg(feature = "use-b-ba")]
use crate::b::ba::Ba;
use crate::unit::Unit;
use crate::utils::error::{Result, WireError};
use std::io::Write;

/// A unit addressable from configuration by its label.
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    pub label: &'static str,
    pub print: fn(&mut dyn Write) -> Result<()>,
}

/// Every unit compiled into this build, in tree order. `BA` is present only
/// when the `use-b-ba` feature is enabled.
pub const UNITS: &[UnitEntry] = &[
    UnitEntry {
        label: "AAA",
        print: <Aaa as Unit>::print,
    },
    UnitEntry {
        label: "AAA2",
        print: <Aaa2 as Unit>::print,
    },
    UnitEntry {
        label: "AAB",
        print: <Aab as Unit>::print,
    },
    UnitEntry {
        label: "ABA",
        print: <Aba as Unit>::print,
    },
    #[cfg(feature = "use-b-ba")]
    UnitEntry {
        label: "BA",
        print: <Ba as Unit>::print,
    },
];

/// Case-sensitive lookup. Labels absent from this build (rather than
/// misspelled) still report as unknown; the caller cannot tell the
/// difference and does not need to.
pub fn find_unit(name: &str) -> Result<&'static UnitEntry> {
    UNITS
        .iter()
        .find(|entry| entry.label == name)
        .ok_or_else(|| WireError::UnknownUnitError {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_unit_known_label() {
        let entry = find_unit("AAA").unwrap();
        assert_eq!(entry.label, "AAA");
    }

    #[test]
    fn test_find_unit_unknown_label() {
        let err = find_unit("ZZZ").unwrap_err();
        assert!(matches!(err, WireError::UnknownUnitError { ref name } if name == "ZZZ"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(find_unit("aaa").is_err());
    }

    #[test]
    fn test_ba_registered_iff_compiled_in() {
        assert_eq!(find_unit("BA").is_ok(), cfg!(feature = "use-b-ba"));
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, entry) in UNITS.iter().enumerate() {
            assert!(!UNITS[i + 1..].iter().any(|other| other.label == entry.label));
        }
    }
}
