use serde::Serialize;

/// Snapshot of the compile-time configuration. This is the runtime
/// counterpart of whatever flag set the build system selected.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub package: &'static str,
    pub version: &'static str,
    pub cli: bool,
    pub use_b_ba: bool,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            package: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            cli: cfg!(feature = "cli"),
            use_b_ba: cfg!(feature = "use-b-ba"),
        }
    }

    /// Names of the flags compiled into this build, in a fixed order.
    pub fn enabled_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.cli {
            flags.push("cli");
        }
        if self.use_b_ba {
            flags.push("use-b-ba");
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_compiled_features() {
        let info = BuildInfo::current();
        assert_eq!(info.package, "modwire");
        assert_eq!(info.use_b_ba, cfg!(feature = "use-b-ba"));
        assert_eq!(info.cli, cfg!(feature = "cli"));
    }

    #[test]
    fn test_enabled_flags_consistent_with_fields() {
        let info = BuildInfo::current();
        let flags = info.enabled_flags();
        assert_eq!(flags.contains(&"use-b-ba"), info.use_b_ba);
        assert_eq!(flags.contains(&"cli"), info.cli);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_string(&BuildInfo::current()).unwrap();
        assert!(json.contains("\"use_b_ba\""));
        assert!(json.contains("\"version\""));
    }
}
