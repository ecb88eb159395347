//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::TfGlobalStore;
use crate::constants::DEFAULT_LOCALE;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Current locale, or the default when no store is installed
pub fn current_locale(cx: &App) -> String {
    cx.try_global::<TfGlobalStore>()
        .map(|store| store.read(cx).locale().to_string())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Get translated string from "playground" namespace
pub fn i18n_playground(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("playground.{key}"), locale = locale).into()
}

#[cfg(test)]
mod tests {
    use rust_i18n::t;

    #[test]
    fn korean_and_english_placeholders_exist() {
        assert_eq!(t!("text_field.placeholder", locale = "ko"), "텍스트를 입력해 주세요.");
        assert_eq!(t!("text_field.placeholder", locale = "en"), "Please enter text.");
    }

    #[test]
    fn unknown_locale_falls_back_to_korean() {
        assert_eq!(t!("text_field.placeholder", locale = "fr"), "텍스트를 입력해 주세요.");
    }

    #[test]
    fn playground_keys_are_translated() {
        assert_eq!(t!("playground.events", locale = "en"), "Events");
        assert_eq!(t!("playground.events", locale = "ko"), "이벤트");
    }
}
