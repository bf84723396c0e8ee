//! Startup locale selection.
//!
//! The user's persisted choice (stored by the UI layer, outside this
//! crate) takes priority; otherwise the environment decides.

use std::env;

use crate::Locale;

/// Pick a locale from a user override, falling back to detection.
pub fn detect_locale_with_override(user_locale: Option<&str>) -> Locale {
    if let Some(locale_str) = user_locale {
        if let Some(locale) = Locale::parse(locale_str) {
            return locale;
        }
    }
    detect_locale()
}

/// Detect the locale from the environment.
///
/// Priority: `ANKIGEN_LOCALE` > `LC_ALL` > `LC_MESSAGES` > `LANG` >
/// default. Unparseable values fall through to the next source.
pub fn detect_locale() -> Locale {
    for var in ["ANKIGEN_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Some(locale) = from_env(var) {
            return locale;
        }
    }
    Locale::default()
}

fn from_env(var: &str) -> Option<Locale> {
    env::var(var).ok().and_then(|v| Locale::parse(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_when_parseable() {
        assert_eq!(detect_locale_with_override(Some("ko_KR")), Locale::Ko);
        assert_eq!(detect_locale_with_override(Some("en-US")), Locale::En);
    }

    #[test]
    fn env_priority_chain() {
        // Env-var tests share process state; save and restore everything
        // and keep all detection assertions in this one test.
        let vars = ["ANKIGEN_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"];
        let saved: Vec<_> = vars.iter().map(|v| (*v, env::var(v).ok())).collect();
        for var in &vars {
            env::remove_var(var);
        }

        assert_eq!(detect_locale(), Locale::default());
        assert_eq!(
            detect_locale_with_override(Some("not-a-locale")),
            Locale::default()
        );
        assert_eq!(detect_locale_with_override(None), Locale::default());

        env::set_var("LANG", "ko_KR.UTF-8");
        assert_eq!(detect_locale(), Locale::Ko);

        env::set_var("ANKIGEN_LOCALE", "en");
        assert_eq!(detect_locale(), Locale::En);

        // Unparseable high-priority value falls through to LANG.
        env::set_var("ANKIGEN_LOCALE", "zz-ZZ");
        assert_eq!(detect_locale(), Locale::Ko);

        for (var, value) in saved {
            match value {
                Some(v) => env::set_var(var, v),
                None => env::remove_var(var),
            }
        }
    }

    #[test]
    fn from_env_parses_or_none() {
        env::set_var("ANKIGEN_I18N_TEST_LOCALE", "ko-KR");
        assert_eq!(from_env("ANKIGEN_I18N_TEST_LOCALE"), Some(Locale::Ko));

        env::set_var("ANKIGEN_I18N_TEST_LOCALE", "invalid");
        assert_eq!(from_env("ANKIGEN_I18N_TEST_LOCALE"), None);

        env::remove_var("ANKIGEN_I18N_TEST_LOCALE");
        assert_eq!(from_env("ANKIGEN_I18N_TEST_LOCALE"), None);
    }
}
