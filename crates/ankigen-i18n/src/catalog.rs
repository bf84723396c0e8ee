//! Message catalog storage and the startup integrity check.

use std::collections::HashMap;

use tracing::debug;

use crate::template::Template;
use crate::{I18nError, Locale};

/// Immutable mapping from (locale, key) to a parsed [`Template`].
///
/// Built once through [`CatalogBuilder`] and frozen; lookups are pure and
/// the catalog may be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<Locale, HashMap<String, Template>>,
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up the template for an exact (locale, key) pair.
    ///
    /// Absence is an expected outcome, not an error; fallback policy lives
    /// in the resolver.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&Template> {
        self.entries.get(&locale).and_then(|table| table.get(key))
    }

    /// Whether any entries were declared for `locale`.
    pub fn has_locale(&self, locale: Locale) -> bool {
        self.entries.contains_key(&locale)
    }

    /// All declared locales, in no particular order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.entries.keys().copied()
    }

    /// All keys declared for `locale`. Empty if the locale is undeclared.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.entries
            .get(&locale)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Verify the completeness invariant against `default_locale`.
    ///
    /// The default locale must be declared, and every key it declares must
    /// be present in every other declared locale. The resolver runs this at
    /// construction so a broken catalog is caught at startup rather than
    /// surfacing as a fallback at render time.
    pub fn verify_complete(&self, default_locale: Locale) -> Result<(), I18nError> {
        let default_table = self
            .entries
            .get(&default_locale)
            .ok_or(I18nError::MissingDefaultLocale(default_locale))?;

        for (locale, table) in &self.entries {
            if *locale == default_locale {
                continue;
            }
            let mut missing: Vec<String> = default_table
                .keys()
                .filter(|key| !table.contains_key(*key))
                .cloned()
                .collect();
            if !missing.is_empty() {
                missing.sort_unstable();
                return Err(I18nError::IncompleteLocale {
                    locale: *locale,
                    missing,
                });
            }
        }

        debug!(
            locales = self.entries.len(),
            keys = default_table.len(),
            "catalog completeness verified"
        );
        Ok(())
    }
}

/// The only mutation surface for a [`Catalog`].
///
/// Template sources are parsed as they are inserted, so malformed catalog
/// data fails here, at build time, never during rendering.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: HashMap<Locale, HashMap<String, Template>>,
}

impl CatalogBuilder {
    /// Parse `source` and register it under (locale, key).
    ///
    /// Re-inserting an existing pair replaces the previous template.
    pub fn insert(
        &mut self,
        locale: Locale,
        key: impl Into<String>,
        source: &str,
    ) -> Result<(), I18nError> {
        let key = key.into();
        let template = Template::parse(source).map_err(|err| I18nError::TemplateSyntax {
            key: key.clone(),
            locale,
            detail: err.to_string(),
        })?;
        self.entries.entry(locale).or_default().insert(key, template);
        Ok(())
    }

    /// Freeze the builder into an immutable catalog.
    pub fn build(self) -> Catalog {
        Catalog {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_locale_catalog() -> Catalog {
        let mut builder = Catalog::builder();
        builder.insert(Locale::En, "definition", "Definition").unwrap();
        builder.insert(Locale::En, "word", "Word").unwrap();
        builder.insert(Locale::Ko, "definition", "정의").unwrap();
        builder.insert(Locale::Ko, "word", "단어").unwrap();
        builder.build()
    }

    #[test]
    fn get_exact_pair() {
        let catalog = two_locale_catalog();
        let template = catalog.get(Locale::Ko, "word").unwrap();
        assert_eq!(template.render("word", &[]).unwrap(), "단어");
    }

    #[test]
    fn get_missing_key_is_none() {
        let catalog = two_locale_catalog();
        assert!(catalog.get(Locale::En, "nonexistent").is_none());
    }

    #[test]
    fn has_locale() {
        let catalog = two_locale_catalog();
        assert!(catalog.has_locale(Locale::En));
        assert!(catalog.has_locale(Locale::Ko));

        let empty = Catalog::builder().build();
        assert!(!empty.has_locale(Locale::En));
    }

    #[test]
    fn keys_of_undeclared_locale_is_empty() {
        let empty = Catalog::builder().build();
        assert_eq!(empty.keys(Locale::En).count(), 0);
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut builder = Catalog::builder();
        builder.insert(Locale::En, "word", "Word").unwrap();
        builder.insert(Locale::En, "word", "Term").unwrap();
        let catalog = builder.build();
        assert_eq!(
            catalog.get(Locale::En, "word").unwrap().render("word", &[]).unwrap(),
            "Term"
        );
    }

    #[test]
    fn malformed_template_fails_at_insert() {
        let mut builder = Catalog::builder();
        let err = builder
            .insert(Locale::En, "broken", "Hello {name")
            .unwrap_err();
        match err {
            I18nError::TemplateSyntax { key, locale, .. } => {
                assert_eq!(key, "broken");
                assert_eq!(locale, Locale::En);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn verify_complete_passes_for_equal_key_sets() {
        let catalog = two_locale_catalog();
        assert!(catalog.verify_complete(Locale::En).is_ok());
    }

    #[test]
    fn verify_complete_reports_missing_keys_sorted() {
        let mut builder = Catalog::builder();
        builder.insert(Locale::En, "beta", "B").unwrap();
        builder.insert(Locale::En, "alpha", "A").unwrap();
        builder.insert(Locale::En, "gamma", "C").unwrap();
        builder.insert(Locale::Ko, "gamma", "다").unwrap();
        let catalog = builder.build();

        let err = catalog.verify_complete(Locale::En).unwrap_err();
        assert_eq!(
            err,
            I18nError::IncompleteLocale {
                locale: Locale::Ko,
                missing: vec!["alpha".into(), "beta".into()],
            }
        );
    }

    #[test]
    fn verify_complete_requires_default_locale() {
        let mut builder = Catalog::builder();
        builder.insert(Locale::Ko, "word", "단어").unwrap();
        let catalog = builder.build();
        assert_eq!(
            catalog.verify_complete(Locale::En).unwrap_err(),
            I18nError::MissingDefaultLocale(Locale::En)
        );
    }

    #[test]
    fn extra_keys_in_other_locales_are_allowed() {
        // The invariant is directional: the default locale's keys must be
        // everywhere, not the reverse.
        let mut builder = Catalog::builder();
        builder.insert(Locale::En, "word", "Word").unwrap();
        builder.insert(Locale::Ko, "word", "단어").unwrap();
        builder.insert(Locale::Ko, "extra", "추가").unwrap();
        let catalog = builder.build();
        assert!(catalog.verify_complete(Locale::En).is_ok());
    }
}
