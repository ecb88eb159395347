//! TextFieldProps - Caller-supplied configuration and callbacks

use std::rc::Rc;

use gpui::{App, SharedString, Window};

/// Callback receiving the field's full text
pub type ValueHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;
/// Callback without arguments
pub type FocusHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Props of a [`TextField`](super::TextField).
///
/// Every field is optional. Absent callbacks are simply not called. Callbacks
/// run after the field's own update has finished, so they may update the field.
#[derive(Clone, Default)]
pub struct TextFieldProps {
    pub(crate) class_name: Option<SharedString>,
    pub(crate) placeholder: Option<SharedString>,
    pub(crate) value: Option<String>,
    pub(crate) disabled: bool,
    pub(crate) on_change: Option<ValueHandler>,
    pub(crate) on_enter: Option<ValueHandler>,
    pub(crate) on_focus: Option<FocusHandler>,
}

impl TextFieldProps {
    /// Create empty props
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra class names, whitespace separated
    pub fn class_name(mut self, class_name: impl Into<SharedString>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Placeholder override
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Make the field controlled, starting from `value`
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the full text on every content change
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Called with the current text when Enter is pressed
    pub fn on_enter(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_enter = Some(Rc::new(handler));
        self
    }

    /// Called when the field gains focus
    pub fn on_focus(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_focus = Some(Rc::new(handler));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let props = TextFieldProps::new();
        assert!(props.class_name.is_none());
        assert!(props.placeholder.is_none());
        assert!(props.value.is_none());
        assert!(!props.disabled);
        assert!(props.on_change.is_none());
        assert!(props.on_enter.is_none());
        assert!(props.on_focus.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let props = TextFieldProps::new()
            .class_name("search")
            .placeholder("검색")
            .value("seed")
            .disabled(true)
            .on_change(|_, _, _| {})
            .on_focus(|_, _| {});

        assert_eq!(props.class_name.as_ref().map(|s| s.as_str()), Some("search"));
        assert_eq!(props.placeholder.as_ref().map(|s| s.as_str()), Some("검색"));
        assert_eq!(props.value.as_deref(), Some("seed"));
        assert!(props.disabled);
        assert!(props.on_change.is_some());
        assert!(props.on_enter.is_none());
        assert!(props.on_focus.is_some());
    }
}
