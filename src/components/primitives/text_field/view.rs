//! TextField Component

use gpui::{
    div, prelude::*, px, App, Context, ElementId, Entity, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, Styled, Subscription, Window,
};
use tracing::trace;

use super::class_list::ClassList;
use super::props::TextFieldProps;
use super::state::{FieldStyle, TextFieldEvent, TextFieldState};
use crate::constants::FIELD_MIN_WIDTH;
use crate::states::TfGlobalStore;
use crate::theme::colors::TfColors;
use crate::theme::typography::Typography;

/// A single-line text field
pub struct TextField {
    id: ElementId,
    state: TextFieldState,
    props: TextFieldProps,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<TextFieldEvent> for TextField {}

impl TextField {
    /// Create a new text field
    pub fn new(
        id: impl Into<ElementId>,
        props: TextFieldProps,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();

        let mut state = match props.value.clone() {
            Some(value) => TextFieldState::controlled(value),
            None => TextFieldState::new(),
        };
        state.set_placeholder(props.placeholder.clone());
        state.set_class_name(props.class_name.as_ref().map(|c| c.as_str()));
        state.set_disabled(props.disabled);
        if let Some(store) = cx.try_global::<TfGlobalStore>() {
            state.set_locale(store.read(cx).locale().to_string());
        }

        let subscriptions = vec![
            cx.on_focus(&focus_handle, window, |this, window, cx| {
                let event = this.state.focus();
                this.dispatch(event, window, cx);
            }),
            cx.on_blur(&focus_handle, window, |this, window, cx| {
                let event = this.state.blur();
                this.dispatch(event, window, cx);
            }),
        ];

        Self {
            id: id.into(),
            state,
            props,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    // ==================== Getters ====================

    /// Current text
    pub fn value(&self) -> &str {
        self.state.value()
    }

    /// Placeholder as rendered
    pub fn placeholder(&self) -> SharedString {
        self.state.placeholder()
    }

    /// Class tokens of the rendered element
    pub fn class_list(&self) -> &ClassList {
        self.state.class_list()
    }

    /// Whether the field holds focus
    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    /// Current border style
    pub fn style(&self) -> FieldStyle {
        self.state.style()
    }

    // ==================== Setters ====================

    /// Set the value (parent-driven; emits nothing)
    pub fn set_value(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        self.state.set_value(value);
        cx.notify();
    }

    /// Replace the extra class names
    pub fn set_class_name(&mut self, class_name: Option<&str>, cx: &mut Context<Self>) {
        self.state.set_class_name(class_name);
        cx.notify();
    }

    /// Set the placeholder override
    pub fn set_placeholder(&mut self, placeholder: Option<SharedString>, cx: &mut Context<Self>) {
        self.state.set_placeholder(placeholder);
        cx.notify();
    }

    /// Set the locale of the default placeholder
    pub fn set_locale(&mut self, locale: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.state.set_locale(locale);
        cx.notify();
    }

    /// Set disabled state.
    ///
    /// Disabling blurs a focused field. Enabling a field whose handle already
    /// holds focus marks it focused and reports the focus.
    pub fn set_disabled(&mut self, disabled: bool, window: &mut Window, cx: &mut Context<Self>) {
        self.state.set_disabled(disabled);
        let has_focus = self.focus_handle.is_focused(window);
        if disabled && has_focus {
            window.blur();
        } else if !disabled && has_focus {
            let event = self.state.focus();
            self.dispatch(event, window, cx);
        }
        cx.notify();
    }

    /// Remove all text
    pub fn clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let event = self.state.clear();
        self.dispatch(event, window, cx);
    }

    // ==================== Events ====================

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if self.handle_key(&keystroke.key, keystroke.key_char.as_deref(), window, cx) {
            cx.stop_propagation();
        }
    }

    /// Apply one key press; returns whether the field produced an event
    pub(crate) fn handle_key(
        &mut self,
        key: &str,
        key_char: Option<&str>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> bool {
        let event = self.state.key_down(key, key_char);
        let handled = event.is_some();
        self.dispatch(event, window, cx);
        handled
    }

    /// Emit `event` and schedule the matching prop callback.
    ///
    /// Callbacks run deferred, after this entity's update has returned, so a
    /// callback may update the field itself (e.g. write back a controlled value).
    fn dispatch(&mut self, event: Option<TextFieldEvent>, window: &mut Window, cx: &mut Context<Self>) {
        let Some(event) = event else {
            return;
        };
        trace!(id = ?self.id, event = ?event, "Text field event");

        cx.emit(event.clone());

        match event {
            TextFieldEvent::Change(value) => {
                if let Some(handler) = self.props.on_change.clone() {
                    window.defer(cx, move |window, cx| handler(&value, window, cx));
                }
            }
            TextFieldEvent::Enter(value) => {
                if let Some(handler) = self.props.on_enter.clone() {
                    window.defer(cx, move |window, cx| handler(&value, window, cx));
                }
            }
            TextFieldEvent::Focus => {
                if let Some(handler) = self.props.on_focus.clone() {
                    window.defer(cx, move |window, cx| handler(window, cx));
                }
            }
            TextFieldEvent::Blur => {}
        }

        cx.notify();
    }
}

impl Focusable for TextField {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextField {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let style = self.state.style();
        let focused = self.state.is_focused();
        let disabled = self.state.is_disabled();

        let (display_text, text_color) = if self.state.value().is_empty() {
            (self.state.placeholder(), TfColors::input_placeholder())
        } else {
            (
                SharedString::from(self.state.value().to_string()),
                TfColors::text_primary(),
            )
        };

        let bg = if disabled {
            TfColors::input_bg_disabled()
        } else {
            TfColors::input_bg()
        };

        div()
            .id(self.id.clone())
            .key_context("TextField")
            .track_focus(&self.focus_handle)
            .px_3()
            .py_2()
            .bg(bg)
            .when(focused, |this| this.border_2())
            .when(!focused, |this| this.border_1())
            .border_color(style.border_color)
            .rounded_md()
            .text_color(text_color)
            .text_size(px(Typography::TEXT_SM))
            .min_w(px(FIELD_MIN_WIDTH))
            .when(disabled, |this| this.opacity(0.5).cursor_not_allowed())
            .when(!disabled, |this| this.cursor_text())
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, _cx| {
                    if !this.state.is_disabled() {
                        this.focus_handle.focus(window);
                    }
                }),
            )
            .on_key_down(cx.listener(Self::on_key_down))
            .child(display_text)
    }
}

/// Create a text field entity
pub fn text_field<V: 'static>(
    id: impl Into<ElementId>,
    props: TextFieldProps,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<TextField> {
    let id = id.into();
    cx.new(|cx| TextField::new(id, props, window, cx))
}
