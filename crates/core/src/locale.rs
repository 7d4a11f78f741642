//! Supported display locales and locale-prefixed path handling.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Display language governing routing and message selection.
///
/// Every request resolves to exactly one of these; anything unsupported falls
/// back to [`Locale::DEFAULT`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ru,
    En,
    Uz,
    Tr,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::Ru;

    pub const ALL: [Locale; 4] = [Locale::Ru, Locale::En, Locale::Uz, Locale::Tr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
            Locale::Uz => "uz",
            Locale::Tr => "tr",
        }
    }

    /// Exact match against the supported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Resolve an optional path segment, falling back to the default locale.
    pub fn resolve(segment: Option<&str>) -> Self {
        segment.and_then(Self::from_code).unwrap_or(Self::DEFAULT)
    }

    /// Split a request path into its locale and the locale-stripped path.
    ///
    /// The stripped path is normalized: leading slash, no empty segments, no
    /// trailing slash (`"/"` for the root). When the first segment is not a
    /// supported locale the default locale is returned and no segment is
    /// consumed.
    pub fn split_path(path: &str) -> (Self, String) {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let (locale, rest) = match segments.split_first() {
            Some((first, rest)) => match Self::from_code(first) {
                Some(locale) => (locale, rest),
                None => (Self::DEFAULT, segments.as_slice()),
            },
            None => (Self::DEFAULT, segments.as_slice()),
        };

        (locale, format!("/{}", rest.join("/")))
    }

    /// Prefix a locale-stripped path with this locale (`"/"` maps to `/{code}`).
    pub fn localize(self, path: &str) -> String {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            format!("/{}", self.code())
        } else {
            format!("/{}/{}", self.code(), trimmed)
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DomainError::validation(format!("unsupported locale '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(Locale::resolve(Some("en")), Locale::En);
        assert_eq!(Locale::resolve(Some("fr")), Locale::Ru);
        assert_eq!(Locale::resolve(Some("EN")), Locale::Ru);
        assert_eq!(Locale::resolve(None), Locale::Ru);
    }

    #[test]
    fn split_path_strips_supported_prefix() {
        assert_eq!(
            Locale::split_path("/uz/sales/leads"),
            (Locale::Uz, "/sales/leads".to_string())
        );
        assert_eq!(Locale::split_path("/en/login/"), (Locale::En, "/login".to_string()));
        assert_eq!(Locale::split_path("/tr"), (Locale::Tr, "/".to_string()));
    }

    #[test]
    fn split_path_keeps_unsupported_prefix() {
        assert_eq!(
            Locale::split_path("/fr/inventory"),
            (Locale::Ru, "/fr/inventory".to_string())
        );
        assert_eq!(
            Locale::split_path("/inventory//reception"),
            (Locale::Ru, "/inventory/reception".to_string())
        );
        assert_eq!(Locale::split_path(""), (Locale::Ru, "/".to_string()));
        assert_eq!(Locale::split_path("/"), (Locale::Ru, "/".to_string()));
    }

    #[test]
    fn localize_prefixes_code() {
        assert_eq!(Locale::En.localize("/"), "/en");
        assert_eq!(Locale::Uz.localize("/login"), "/uz/login");
        assert_eq!(Locale::Tr.localize("settings"), "/tr/settings");
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Locale::Uz).unwrap(), "\"uz\"");
        let parsed: Locale = serde_json::from_str("\"tr\"").unwrap();
        assert_eq!(parsed, Locale::Tr);
    }
}
