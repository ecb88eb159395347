//! TextFieldState - Toolkit-independent field model
//!
//! Holds everything the field knows (value, focus, placeholder, classes) and
//! turns raw input into [`TextFieldEvent`]s. The GPUI view only forwards
//! window events here and dispatches whatever comes back.

use gpui::{Rgba, SharedString};
use rust_i18n::t;

use super::class_list::{ClassList, DISABLED_CLASS, FOCUSED_CLASS};
use crate::constants::{BORDER_WIDTH, BORDER_WIDTH_FOCUSED, DEFAULT_LOCALE, PLACEHOLDER_KEY};
use crate::theme::colors::TfColors;

/// Events produced by a text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFieldEvent {
    /// Content changed; carries the full text, not the delta
    Change(String),
    /// Enter was pressed; carries the current text
    Enter(String),
    /// The field gained focus
    Focus,
    /// The field lost focus
    Blur,
}

/// Who owns the field's value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueMode {
    /// The field commits its own edits
    #[default]
    Uncontrolled,
    /// The parent owns the value and commits edits through `set_value`
    Controlled,
}

/// Border style derived from focus state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    /// Border width in pixels
    pub border_width: f32,
    /// Border color
    pub border_color: Rgba,
}

impl FieldStyle {
    /// Style of an idle field
    pub fn idle() -> Self {
        Self {
            border_width: BORDER_WIDTH,
            border_color: TfColors::input_border(),
        }
    }

    /// Style of a focused field
    pub fn focused() -> Self {
        Self {
            border_width: BORDER_WIDTH_FOCUSED,
            border_color: TfColors::border_focus(),
        }
    }
}

/// State of a single text field
#[derive(Debug, Clone)]
pub struct TextFieldState {
    value: String,
    mode: ValueMode,
    placeholder: Option<SharedString>,
    locale: SharedString,
    class_list: ClassList,
    focused: bool,
    disabled: bool,
}

impl TextFieldState {
    /// Create an empty, uncontrolled field
    pub fn new() -> Self {
        Self {
            value: String::new(),
            mode: ValueMode::Uncontrolled,
            placeholder: None,
            locale: SharedString::new_static(DEFAULT_LOCALE),
            class_list: ClassList::new(),
            focused: false,
            disabled: false,
        }
    }

    /// Create a controlled field showing `value`
    pub fn controlled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            mode: ValueMode::Controlled,
            ..Self::new()
        }
    }

    // ==================== Getters ====================

    /// Current text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value ownership mode
    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// Placeholder to display: the caller's text, or the localized default
    pub fn placeholder(&self) -> SharedString {
        match &self.placeholder {
            Some(placeholder) if !placeholder.is_empty() => placeholder.clone(),
            _ => default_placeholder(&self.locale),
        }
    }

    /// Locale used for the default placeholder
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Class tokens of the rendered element
    pub fn class_list(&self) -> &ClassList {
        &self.class_list
    }

    /// Class attribute string, e.g. `"text-field custom"`
    pub fn class_attr(&self) -> String {
        self.class_list.to_string()
    }

    /// Whether the field holds focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the field is disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Border style for the current focus state
    pub fn style(&self) -> FieldStyle {
        if self.focused {
            FieldStyle::focused()
        } else {
            FieldStyle::idle()
        }
    }

    // ==================== Props ====================

    /// Set the placeholder override; `None` falls back to the default text
    pub fn set_placeholder(&mut self, placeholder: Option<SharedString>) {
        self.placeholder = placeholder;
    }

    /// Set the locale used for the default placeholder
    pub fn set_locale(&mut self, locale: impl Into<SharedString>) {
        self.locale = locale.into();
    }

    /// Replace the caller-supplied class names
    pub fn set_class_name(&mut self, class_name: Option<&str>) {
        self.class_list.set_extra(class_name);
    }

    /// Enable or disable the field
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.class_list.set_state(DISABLED_CLASS, disabled);
    }

    /// Parent-driven value update. Emits nothing.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    // ==================== Input ====================

    /// Append typed or pasted text.
    ///
    /// Line breaks and tabs are dropped since the field is single-line.
    pub fn insert_text(&mut self, text: &str) -> Option<TextFieldEvent> {
        if self.disabled {
            return None;
        }

        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return None;
        }

        let mut next = self.value.clone();
        next.push_str(&text);
        self.propose(next)
    }

    /// Remove the last character
    pub fn backspace(&mut self) -> Option<TextFieldEvent> {
        if self.disabled || self.value.is_empty() {
            return None;
        }

        let mut next = self.value.clone();
        next.pop();
        self.propose(next)
    }

    /// Remove all text
    pub fn clear(&mut self) -> Option<TextFieldEvent> {
        if self.disabled || self.value.is_empty() {
            return None;
        }
        self.propose(String::new())
    }

    /// Handle a key press.
    ///
    /// `key` is the key name (`"enter"`, `"backspace"`, `"a"`, ...) and
    /// `key_char` the text the key would type, if any.
    pub fn key_down(&mut self, key: &str, key_char: Option<&str>) -> Option<TextFieldEvent> {
        if self.disabled {
            return None;
        }

        match key {
            "enter" => Some(TextFieldEvent::Enter(self.value.clone())),
            "backspace" => self.backspace(),
            "escape" | "tab" => None,
            _ => key_char.and_then(|text| self.insert_text(text)),
        }
    }

    /// The field gained focus
    pub fn focus(&mut self) -> Option<TextFieldEvent> {
        if self.disabled || self.focused {
            return None;
        }
        self.set_focused(true);
        Some(TextFieldEvent::Focus)
    }

    /// The field lost focus
    pub fn blur(&mut self) -> Option<TextFieldEvent> {
        if !self.focused {
            return None;
        }
        self.set_focused(false);
        Some(TextFieldEvent::Blur)
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.class_list.set_state(FOCUSED_CLASS, focused);
    }

    fn propose(&mut self, next: String) -> Option<TextFieldEvent> {
        if next == self.value {
            return None;
        }
        if self.mode == ValueMode::Uncontrolled {
            self.value.clone_from(&next);
        }
        Some(TextFieldEvent::Change(next))
    }
}

impl Default for TextFieldState {
    fn default() -> Self {
        Self::new()
    }
}

/// Localized default placeholder for `locale`
pub fn default_placeholder(locale: &str) -> SharedString {
    t!(PLACEHOLDER_KEY, locale = locale).to_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors::css_rgb;

    const DEFAULT_TEXT: &str = "텍스트를 입력해 주세요.";

    fn type_text(state: &mut TextFieldState, text: &str) -> Vec<TextFieldEvent> {
        text.chars()
            .filter_map(|c| {
                let key = c.to_string();
                state.key_down(&key, Some(&key))
            })
            .collect()
    }

    fn last_change(events: &[TextFieldEvent]) -> Option<&str> {
        events.iter().rev().find_map(|e| match e {
            TextFieldEvent::Change(v) => Some(v.as_str()),
            _ => None,
        })
    }

    #[test]
    fn class_name_is_included() {
        let mut state = TextFieldState::new();
        state.set_class_name(Some("test-class"));
        assert!(state.class_list().contains("test-class"));
        assert!(state.class_list().contains("text-field"));
        assert_eq!(state.class_attr(), "text-field test-class");
    }

    #[test]
    fn default_placeholder_is_korean_prompt() {
        let state = TextFieldState::new();
        assert_eq!(state.placeholder().to_string(), DEFAULT_TEXT);
    }

    #[test]
    fn custom_placeholder_overrides_default() {
        let mut state = TextFieldState::new();
        state.set_placeholder(Some("이메일".into()));
        assert_eq!(state.placeholder().to_string(), "이메일");
    }

    #[test]
    fn empty_placeholder_falls_back_to_default() {
        let mut state = TextFieldState::new();
        state.set_placeholder(Some("".into()));
        assert_eq!(state.placeholder().to_string(), DEFAULT_TEXT);
    }

    #[test]
    fn english_locale_changes_default_placeholder() {
        let mut state = TextFieldState::new();
        state.set_locale("en");
        assert_eq!(state.placeholder().to_string(), "Please enter text.");
    }

    #[test]
    fn typing_reports_full_value() {
        let mut state = TextFieldState::new();
        let events = type_text(&mut state, "test");

        assert_eq!(events.len(), 4);
        assert_eq!(events[0], TextFieldEvent::Change("t".into()));
        assert_eq!(last_change(&events), Some("test"));
        assert_eq!(state.value(), "test");
    }

    #[test]
    fn enter_reports_value_without_clearing() {
        let mut state = TextFieldState::new();
        type_text(&mut state, "test");

        let event = state.key_down("enter", None);
        assert_eq!(event, Some(TextFieldEvent::Enter("test".into())));
        assert_eq!(state.value(), "test");
    }

    #[test]
    fn enter_on_empty_field_reports_empty_value() {
        let mut state = TextFieldState::new();
        assert_eq!(state.key_down("enter", None), Some(TextFieldEvent::Enter(String::new())));
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut state = TextFieldState::new();
        type_text(&mut state, "한글");

        assert_eq!(state.key_down("backspace", None), Some(TextFieldEvent::Change("한".into())));
        assert_eq!(state.backspace(), Some(TextFieldEvent::Change(String::new())));
        assert_eq!(state.backspace(), None);
    }

    #[test]
    fn control_characters_are_dropped() {
        let mut state = TextFieldState::new();
        assert_eq!(state.insert_text("a\nb\t"), Some(TextFieldEvent::Change("ab".into())));
        assert_eq!(state.insert_text("\r\n"), None);
        assert_eq!(state.value(), "ab");
    }

    #[test]
    fn navigation_keys_do_nothing() {
        let mut state = TextFieldState::new();
        assert_eq!(state.key_down("escape", None), None);
        assert_eq!(state.key_down("tab", Some("\t")), None);
        assert_eq!(state.key_down("left", None), None);
        assert_eq!(state.value(), "");
    }

    #[test]
    fn clear_reports_empty_value() {
        let mut state = TextFieldState::new();
        state.insert_text("abc");
        assert_eq!(state.clear(), Some(TextFieldEvent::Change(String::new())));
        assert_eq!(state.clear(), None);
    }

    #[test]
    fn focus_emits_once_and_sets_accent_border() {
        let mut state = TextFieldState::new();
        assert_eq!(state.style(), FieldStyle::idle());

        assert_eq!(state.focus(), Some(TextFieldEvent::Focus));
        assert_eq!(state.focus(), None);
        assert!(state.is_focused());

        let style = state.style();
        assert_eq!(style.border_width, 2.0);
        assert_eq!(css_rgb(style.border_color), "rgb(25, 118, 210)");
        assert!(state.class_list().contains(FOCUSED_CLASS));
    }

    #[test]
    fn blur_reverts_border() {
        let mut state = TextFieldState::new();
        assert_eq!(state.blur(), None);

        state.focus();
        assert_eq!(state.blur(), Some(TextFieldEvent::Blur));
        assert!(!state.is_focused());

        let style = state.style();
        assert_eq!(style.border_width, 1.0);
        assert_eq!(style.border_color, TfColors::input_border());
        assert!(!state.class_list().contains(FOCUSED_CLASS));
    }

    #[test]
    fn controlled_field_waits_for_parent() {
        let mut state = TextFieldState::controlled("ab");
        assert_eq!(state.mode(), ValueMode::Controlled);

        assert_eq!(state.insert_text("c"), Some(TextFieldEvent::Change("abc".into())));
        assert_eq!(state.value(), "ab");

        state.set_value("abc");
        assert_eq!(state.value(), "abc");
        assert_eq!(state.key_down("enter", None), Some(TextFieldEvent::Enter("abc".into())));
    }

    #[test]
    fn disabled_field_ignores_input() {
        let mut state = TextFieldState::new();
        state.set_disabled(true);

        assert!(type_text(&mut state, "test").is_empty());
        assert_eq!(state.key_down("enter", None), None);
        assert_eq!(state.focus(), None);
        assert!(state.class_list().contains(DISABLED_CLASS));
    }

    #[test]
    fn disabling_a_focused_field_still_allows_blur() {
        let mut state = TextFieldState::new();
        state.focus();
        state.set_disabled(true);
        assert_eq!(state.blur(), Some(TextFieldEvent::Blur));
    }

    #[test]
    fn focus_is_accepted_again_after_enabling() {
        let mut state = TextFieldState::new();
        state.set_disabled(true);
        assert_eq!(state.focus(), None);

        state.set_disabled(false);
        assert_eq!(state.focus(), Some(TextFieldEvent::Focus));
        assert!(state.is_focused());
        assert!(!state.class_list().contains(DISABLED_CLASS));
    }
}
