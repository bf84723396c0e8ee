//! Build the strings the definition-generation and export steps consume.

use ankigen_i18n::{builtin_resolver, tr, Locale};

fn main() -> Result<(), ankigen_i18n::I18nError> {
    tracing_subscriber::fmt::init();

    let resolver = builtin_resolver()?;

    // Instruction sent verbatim to the language model. The literal braces
    // around the JSON field names come from quoted-literal escapes in the
    // template.
    let prompt = tr!(resolver, Locale::En, "systemPrompt", language = "Korean")?;
    println!("system prompt:\n{prompt}\n");

    // Back side of an exported Anki card; <br> markup passes through for
    // the tab-separated export file.
    let back = tr!(
        resolver,
        Locale::Ko,
        "ankiBack",
        definition = "작은 고양이",
        partOfSpeech = "명사",
        example = "The cat sat on the mat.",
        language = "한국어"
    )?;
    println!("anki back:\n{back}");

    Ok(())
}
