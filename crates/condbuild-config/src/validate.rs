//! Parsing helpers for raw flag values.

use crate::defaults::{FALSEY, TRUTHY};
use crate::error::{ConfigError, ConfigResult};
use crate::model::FlagName;

/// Parse a raw toggle value.
///
/// Returns `Ok(None)` for blank input so an empty variable behaves like an
/// unset one.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidToggle`] when the value is not a recognised
/// boolean spelling.
pub fn parse_toggle(flag: FlagName, raw: &str) -> ConfigResult<Option<bool>> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if TRUTHY.iter().any(|word| word.eq_ignore_ascii_case(value)) {
        return Ok(Some(true));
    }
    if FALSEY.iter().any(|word| word.eq_ignore_ascii_case(value)) {
        return Ok(Some(false));
    }
    Err(ConfigError::InvalidToggle {
        flag,
        value: value.to_string(),
    })
}

/// Treat a blank version as unset; any other value is kept verbatim.
#[must_use]
pub fn normalize_version(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toggle_accepts_common_spellings() {
        for raw in ["1", "true", "YES", " On "] {
            assert_eq!(parse_toggle(FlagName::Debug, raw), Ok(Some(true)), "{raw}");
        }
        for raw in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_toggle(FlagName::Debug, raw), Ok(Some(false)), "{raw}");
        }
    }

    #[test]
    fn parse_toggle_treats_blank_as_unset() {
        assert_eq!(parse_toggle(FlagName::Verbose, ""), Ok(None));
        assert_eq!(parse_toggle(FlagName::Verbose, "   "), Ok(None));
    }

    #[test]
    fn parse_toggle_rejects_unknown_words() {
        let err = parse_toggle(FlagName::Release, " maybe ").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidToggle {
                flag: FlagName::Release,
                value: "maybe".to_string(),
            }
        );
        assert!(err.to_string().contains("RELEASE"));
    }

    #[test]
    fn normalize_version_keeps_value_and_drops_blank() {
        assert_eq!(normalize_version(Some(" 2.0 ")), Some(" 2.0 ".to_string()));
        assert_eq!(normalize_version(Some("\t\n")), None);
        assert_eq!(normalize_version(Some("")), None);
        assert_eq!(normalize_version(None), None);
    }
}
