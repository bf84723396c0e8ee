//! Locale resolution and rendering.

use tracing::debug;

use crate::catalog::Catalog;
use crate::template::Template;
use crate::{I18nError, Locale};

/// Resolves a (locale, key) pair to a template and renders it.
///
/// The fallback chain has exactly two members: the requested locale, then
/// the default locale. Construction runs the catalog completeness check,
/// so every key the default locale declares is guaranteed resolvable for
/// every declared locale.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
    default_locale: Locale,
}

impl Resolver {
    /// Wrap a catalog with a fixed default locale.
    ///
    /// Fails if the catalog does not satisfy the completeness invariant
    /// against `default_locale`; a broken catalog never produces a
    /// resolver.
    pub fn new(catalog: Catalog, default_locale: Locale) -> Result<Self, I18nError> {
        catalog.verify_complete(default_locale)?;
        Ok(Self {
            catalog,
            default_locale,
        })
    }

    /// The locale the fallback chain terminates in.
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Read access to the underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find the template for `key`, trying `locale` then the default.
    ///
    /// Never consults a third locale. Fails with
    /// [`I18nError::MissingTranslation`] only when the default locale also
    /// lacks the key.
    pub fn resolve_template(&self, locale: Locale, key: &str) -> Result<&Template, I18nError> {
        if let Some(template) = self.catalog.get(locale, key) {
            return Ok(template);
        }
        if locale != self.default_locale {
            if let Some(template) = self.catalog.get(self.default_locale, key) {
                debug!(locale = %locale, key, "falling back to default locale");
                return Ok(template);
            }
        }
        Err(I18nError::MissingTranslation {
            key: key.to_string(),
            locale,
        })
    }

    /// Resolve `key` for `locale` and substitute `vars`.
    ///
    /// This is the single functional surface the rest of the application
    /// calls. Both failure kinds surface as typed errors; no partially
    /// substituted string is ever returned.
    pub fn render(
        &self,
        locale: Locale,
        key: &str,
        vars: &[(&str, &str)],
    ) -> Result<String, I18nError> {
        self.resolve_template(locale, key)?.render(key, vars)
    }
}
