#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Report undeclared input fields instead of ignoring them.
    pub strict: bool,
}

impl ValidationPolicy {
    pub const STRICT_MODE_ENV: &'static str = "SCHEMA_STRICT_MODE";

    /// Load policy from `SCHEMA_STRICT_MODE`, lenient when unset.
    pub fn from_env() -> Self {
        let strict = std::env::var(Self::STRICT_MODE_ENV)
            .ok()
            .map(|v| Self::parse_flag(&v))
            .unwrap_or(false);

        Self { strict }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    fn parse_flag(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_truthy_values() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(ValidationPolicy::parse_flag(v), "{v:?} should enable strict mode");
        }
    }

    #[test]
    fn test_parse_flag_rejects_other_values() {
        for v in ["", "0", "false", "off", "strict"] {
            assert!(!ValidationPolicy::parse_flag(v), "{v:?} should not enable strict mode");
        }
    }

    #[test]
    fn test_default_is_lenient() {
        assert!(!ValidationPolicy::default().strict);
        assert!(ValidationPolicy::new(true).strict);
    }
}
