//! Localization for the Ankigen flashcard generator.
//!
//! A static message catalog (locale -> key -> template) plus the resolver
//! that picks a template along a two-step fallback chain and substitutes
//! runtime variables into it. The catalog is built once at startup, parsed
//! into token sequences up front, and shared read-only afterwards.
//!
//! ```
//! use ankigen_i18n::{builtin_resolver, Locale};
//!
//! let resolver = builtin_resolver().unwrap();
//! let title = resolver.render(Locale::Ko, "appTitle", &[]).unwrap();
//! assert_eq!(title, "Anki 플래시카드 생성기");
//! ```

pub mod catalog;
pub mod detect;
pub mod messages;
pub mod resolver;
pub mod template;

use std::fmt;

/// Declared locales.
///
/// Locales that were never declared cannot be constructed; raw strings go
/// through [`Locale::parse`] and callers fall back to the default on
/// `None`, which behaves exactly like a locale missing every key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Korean.
    Ko,
}

impl Locale {
    /// Every declared locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ko];

    /// Parse from a locale string (e.g. "en-US", "ko_KR").
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase().replace('-', "_");
        let lang = s.split('_').next()?;

        match lang {
            "en" => Some(Self::En),
            "ko" => Some(Self::Ko),
            _ => None,
        }
    }

    /// The canonical language tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ko => "한국어",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors surfaced by catalog construction and rendering.
///
/// None of these are retried or degraded to partial output: a missing
/// translation or unbound variable means the caller would otherwise ship a
/// wrong string to the UI or to the language model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    /// The key is absent from both the requested and the default locale.
    #[error("no translation for '{key}' in '{locale}' or the default locale")]
    MissingTranslation {
        /// The message key that was requested.
        key: String,
        /// The locale the caller asked for.
        locale: Locale,
    },

    /// The template references a variable the caller did not bind.
    #[error("template '{key}' references unbound variable '{name}'")]
    UnboundVariable {
        /// The placeholder name with no matching binding.
        name: String,
        /// The message key being rendered.
        key: String,
    },

    /// A template source failed to parse at catalog construction.
    #[error("invalid template '{key}' in locale '{locale}': {detail}")]
    TemplateSyntax {
        /// The message key of the malformed template.
        key: String,
        /// The locale declaring it.
        locale: Locale,
        /// What the parser rejected.
        detail: String,
    },

    /// A declared locale lacks keys the default locale declares.
    #[error("locale '{locale}' is missing keys: {missing:?}")]
    IncompleteLocale {
        /// The incomplete locale.
        locale: Locale,
        /// The missing keys, sorted.
        missing: Vec<String>,
    },

    /// The configured default locale has no table at all.
    #[error("default locale '{0}' is not declared in the catalog")]
    MissingDefaultLocale(Locale),
}

pub use catalog::{Catalog, CatalogBuilder};
pub use detect::{detect_locale, detect_locale_with_override};
pub use messages::{builtin_catalog, builtin_resolver};
pub use resolver::Resolver;
pub use template::{SyntaxError, Template, Token};

/// Render a message with named bindings.
///
/// ```
/// use ankigen_i18n::{builtin_resolver, tr, Locale};
///
/// let resolver = builtin_resolver().unwrap();
/// let prompt = tr!(resolver, Locale::En, "systemPrompt", language = "Korean").unwrap();
/// assert!(prompt.contains("Korean"));
/// ```
#[macro_export]
macro_rules! tr {
    ($resolver:expr, $locale:expr, $key:expr) => {
        $resolver.render($locale, $key, &[])
    };
    ($resolver:expr, $locale:expr, $key:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $resolver.render($locale, $key, &[$((stringify!($name), $value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("en", Some(Locale::En); "bare english")]
    #[test_case("en-US", Some(Locale::En); "english with region dash")]
    #[test_case("en_US", Some(Locale::En); "english with region underscore")]
    #[test_case("EN", Some(Locale::En); "uppercase")]
    #[test_case("ko", Some(Locale::Ko); "bare korean")]
    #[test_case("ko_KR", Some(Locale::Ko); "korean with region")]
    #[test_case("ko-KR.UTF-8", Some(Locale::Ko); "korean with encoding suffix")]
    #[test_case("ja", None; "undeclared language")]
    #[test_case("", None; "empty string")]
    #[test_case("xx-YY", None; "unknown tag")]
    fn locale_parse(input: &str, expected: Option<Locale>) {
        assert_eq!(Locale::parse(input), expected);
    }

    #[test]
    fn locale_properties() {
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::Ko.code(), "ko");
        assert_eq!(Locale::En.name(), "English");
        assert_eq!(Locale::Ko.name(), "한국어");
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::Ko.to_string(), "ko");
    }

    #[test]
    fn error_display() {
        let err = I18nError::MissingTranslation {
            key: "appTitle".into(),
            locale: Locale::Ko,
        };
        assert_eq!(
            err.to_string(),
            "no translation for 'appTitle' in 'ko' or the default locale"
        );

        let err = I18nError::UnboundVariable {
            name: "language".into(),
            key: "systemPrompt".into(),
        };
        assert_eq!(
            err.to_string(),
            "template 'systemPrompt' references unbound variable 'language'"
        );
    }

    #[test]
    fn tr_macro_without_bindings() {
        let resolver = builtin_resolver().unwrap();
        assert_eq!(tr!(resolver, Locale::En, "word").unwrap(), "Word");
    }

    #[test]
    fn tr_macro_with_bindings() {
        let resolver = builtin_resolver().unwrap();
        let back = tr!(
            resolver,
            Locale::Ko,
            "ankiBack",
            definition = "작은 고양이",
            partOfSpeech = "명사",
            example = "The cat sat on the mat.",
            language = "한국어",
        )
        .unwrap();
        assert!(back.starts_with("정의: 작은 고양이<br>"));
    }
}
