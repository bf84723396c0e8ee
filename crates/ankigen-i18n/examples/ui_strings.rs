//! Render the UI strings the way the interface layer would.

use ankigen_i18n::{builtin_resolver, detect_locale_with_override, Locale};

fn main() -> Result<(), ankigen_i18n::I18nError> {
    tracing_subscriber::fmt::init();

    let resolver = builtin_resolver()?;
    let locale = detect_locale_with_override(std::env::args().nth(1).as_deref());
    println!("locale: {} ({})", locale.code(), locale.name());

    for key in [
        "appTitle",
        "apiKeyLabel",
        "languageLabel",
        "wordInputPlaceholder",
        "getDefinition",
        "searchHistory",
        "exportToAnki",
    ] {
        println!("{key}: {}", resolver.render(locale, key, &[])?);
    }

    // The other declared locale, for comparison.
    let other = match locale {
        Locale::En => Locale::Ko,
        Locale::Ko => Locale::En,
    };
    println!(
        "\nappTitle in {}: {}",
        other.code(),
        resolver.render(other, "appTitle", &[])?
    );

    Ok(())
}
