//! Locale inspection for rendering the square pixel glyphs.
//!
//! Output is always UTF-8; this only detects terminals that are likely to
//! render it as garbage so the user can be warned before the editor starts.

/// Environment variables consulted, highest precedence first.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Resolve the effective character-type locale.
///
/// The first non-empty variable in [`LOCALE_VARS`] wins. `None` means the
/// implicit "C" locale.
///
/// # Arguments
/// * `lookup` - Reads an environment variable by name
pub fn effective_locale<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}

/// Whether a locale name selects UTF-8, e.g. `en_US.UTF-8` or `C.utf8`.
pub fn is_utf8(locale: &str) -> bool {
    let codeset = locale
        .split_once('.')
        .map(|(_, rest)| rest.split('@').next().unwrap_or(rest))
        .unwrap_or_default()
        .to_ascii_lowercase();
    codeset == "utf-8" || codeset == "utf8"
}

/// Check the process environment and log a warning if the locale is not
/// UTF-8.
///
/// # Returns
/// `true` if the locale is UTF-8.
pub fn check_utf8_locale() -> bool {
    let locale = effective_locale(|name| std::env::var(name).ok());
    let utf8 = locale.as_deref().is_some_and(is_utf8);
    if !utf8 {
        log::warn!(
            "Locale {} is not UTF-8; pixel glyphs may not render correctly",
            locale.as_deref().unwrap_or("C")
        );
    }
    utf8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_lc_all_takes_precedence() {
        let lookup = env(&[("LC_ALL", "C"), ("LC_CTYPE", "en_US.UTF-8"), ("LANG", "de_DE.UTF-8")]);
        assert_eq!(effective_locale(lookup), Some("C".to_string()));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let lookup = env(&[("LC_ALL", ""), ("LANG", "en_GB.utf8")]);
        assert_eq!(effective_locale(lookup), Some("en_GB.utf8".to_string()));
    }

    #[test]
    fn test_no_locale_vars() {
        assert_eq!(effective_locale(env(&[])), None);
    }

    #[test]
    fn test_is_utf8_variants() {
        assert!(is_utf8("en_US.UTF-8"));
        assert!(is_utf8("C.utf8"));
        assert!(is_utf8("sr_RS.UTF-8@latin"));
        assert!(!is_utf8("C"));
        assert!(!is_utf8("POSIX"));
        assert!(!is_utf8("en_US.ISO-8859-1"));
    }
}
