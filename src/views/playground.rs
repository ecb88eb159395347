//! Playground View
//!
//! Mounts a few text fields side by side and logs the events they emit.

use crate::components::primitives::text_field::{TextField, TextFieldEvent, TextFieldProps, text_field};
use crate::constants::EVENT_LOG_CAPACITY;
use crate::helpers::BoundedDeque;
use crate::states::{LocaleAction, TfGlobalStore, ThemeAction, i18n_playground};
use gpui::{
    Action, Context, Div, Entity, SharedString, Subscription, WeakEntity, Window, div, prelude::*,
};
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use tracing::debug;

/// Longest value the controlled field accepts
const CONTROLLED_MAX_CHARS: usize = 16;

/// One line of the event log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub field: &'static str,
    pub event: TextFieldEvent,
}

impl LogEntry {
    /// Human-readable line, e.g. `search: change "abc"`
    pub fn describe(&self) -> String {
        match &self.event {
            TextFieldEvent::Change(value) => format!("{}: change {value:?}", self.field),
            TextFieldEvent::Enter(value) => format!("{}: enter {value:?}", self.field),
            TextFieldEvent::Focus => format!("{}: focus", self.field),
            TextFieldEvent::Blur => format!("{}: blur", self.field),
        }
    }
}

/// Truncate a proposed controlled value to the accepted length
pub fn limit_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Playground root view
pub struct Playground {
    default_field: Entity<TextField>,
    custom_field: Entity<TextField>,
    controlled_field: Entity<TextField>,
    submitted: Option<SharedString>,
    events: BoundedDeque<LogEntry>,
    _subscriptions: Vec<Subscription>,
}

impl Playground {
    /// Create the playground and its fields
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let this: WeakEntity<Self> = cx.entity().downgrade();

        let default_field = text_field(
            "default-field",
            TextFieldProps::new().class_name("playground-field"),
            window,
            cx,
        );

        let custom_field = text_field(
            "custom-field",
            TextFieldProps::new()
                .class_name("playground-field search")
                .placeholder(i18n_playground(cx, "custom_placeholder"))
                .on_enter(move |value, _window, cx| {
                    let value = SharedString::from(value.to_string());
                    this.update(cx, |this, cx| {
                        this.submitted = Some(value);
                        cx.notify();
                    })
                    .ok();
                })
                .on_focus(|_window, _cx| debug!("Custom field focused")),
            window,
            cx,
        );

        let controlled_field = text_field(
            "controlled-field",
            TextFieldProps::new().class_name("playground-field").value(""),
            window,
            cx,
        );

        let mut subscriptions = vec![
            cx.subscribe(&default_field, |this, _, event: &TextFieldEvent, cx| {
                this.record("default", event, cx);
            }),
            cx.subscribe(&custom_field, |this, _, event: &TextFieldEvent, cx| {
                this.record("custom", event, cx);
            }),
            cx.subscribe(&controlled_field, |this, field, event: &TextFieldEvent, cx| {
                if let TextFieldEvent::Change(proposed) = event {
                    let accepted = limit_chars(proposed, CONTROLLED_MAX_CHARS);
                    field.update(cx, |field, cx| field.set_value(accepted, cx));
                }
                this.record("controlled", event, cx);
            }),
        ];

        // Remember window bounds; they are written to disk on exit
        subscriptions.push(cx.observe_window_bounds(window, |_this, window, cx| {
            let bounds = window.bounds();
            if let Some(store) = cx.try_global::<TfGlobalStore>().cloned() {
                store.update(cx, |state, _| state.set_bounds(bounds));
            }
        }));

        // Push locale changes into the fields' default placeholders
        if let Some(store) = cx.try_global::<TfGlobalStore>() {
            let app_state = store.app_state();
            subscriptions.push(cx.observe(&app_state, |this, model, cx| {
                let locale = model.read(cx).locale().to_string();
                for field in this.fields() {
                    field.update(cx, |field, cx| field.set_locale(locale.clone(), cx));
                }
                cx.notify();
            }));
        }

        Self {
            default_field,
            custom_field,
            controlled_field,
            submitted: None,
            events: BoundedDeque::new(EVENT_LOG_CAPACITY),
            _subscriptions: subscriptions,
        }
    }

    fn fields(&self) -> [Entity<TextField>; 3] {
        [
            self.default_field.clone(),
            self.custom_field.clone(),
            self.controlled_field.clone(),
        ]
    }

    fn record(&mut self, field: &'static str, event: &TextFieldEvent, cx: &mut Context<Self>) {
        self.events.push(LogEntry {
            field,
            event: event.clone(),
        });
        cx.notify();
    }

    fn render_field(
        &self,
        label_key: &str,
        field: &Entity<TextField>,
        cx: &mut Context<Self>,
    ) -> Div {
        let classes = field.read(cx).class_list().to_string();

        v_flex()
            .gap_1()
            .child(Label::new(i18n_playground(cx, label_key)).text_sm())
            .child(field.clone())
            .child(
                Label::new(classes)
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> Div {
        h_flex()
            .gap_2()
            .child(
                Button::new("locale-ko")
                    .label("한국어")
                    .small()
                    .ghost()
                    .on_click(|_, window, cx| window.dispatch_action(LocaleAction::Ko.boxed_clone(), cx)),
            )
            .child(
                Button::new("locale-en")
                    .label("English")
                    .small()
                    .ghost()
                    .on_click(|_, window, cx| window.dispatch_action(LocaleAction::En.boxed_clone(), cx)),
            )
            .child(
                Button::new("theme-light")
                    .label("Light")
                    .small()
                    .ghost()
                    .on_click(|_, window, cx| window.dispatch_action(ThemeAction::Light.boxed_clone(), cx)),
            )
            .child(
                Button::new("theme-dark")
                    .label("Dark")
                    .small()
                    .ghost()
                    .on_click(|_, window, cx| window.dispatch_action(ThemeAction::Dark.boxed_clone(), cx)),
            )
            .child(
                Button::new("clear-log")
                    .label(i18n_playground(cx, "clear"))
                    .small()
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.events.clear();
                        cx.notify();
                    })),
            )
    }

    fn render_events(&self, cx: &mut Context<Self>) -> Div {
        let mut list = v_flex()
            .id("event-log")
            .flex_1()
            .gap_1()
            .p_2()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .overflow_y_scroll();

        if self.events.is_empty() {
            list = list.child(
                Label::new(i18n_playground(cx, "no_events"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            );
        } else {
            for entry in self.events.iter_rev() {
                list = list.child(Label::new(entry.describe()).text_xs());
            }
        }

        v_flex()
            .flex_1()
            .gap_1()
            .child(Label::new(i18n_playground(cx, "events")).text_sm())
            .child(list)
    }
}

impl Render for Playground {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let submitted = self.submitted.clone().unwrap_or_default();

        v_flex()
            .size_full()
            .p_4()
            .gap_4()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(
                h_flex()
                    .justify_between()
                    .child(Label::new(i18n_playground(cx, "title")).text_xl())
                    .child(self.render_toolbar(cx)),
            )
            .child(self.render_field("default_field", &self.default_field, cx))
            .child(self.render_field("custom_field", &self.custom_field, cx))
            .child(self.render_field("controlled_field", &self.controlled_field, cx))
            .child(
                h_flex()
                    .gap_2()
                    .child(Label::new(i18n_playground(cx, "submitted")).text_sm())
                    .child(div().text_sm().child(submitted)),
            )
            .child(self.render_events(cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_formats_each_event() {
        let entry = |event| LogEntry { field: "custom", event };

        assert_eq!(
            entry(TextFieldEvent::Change("abc".into())).describe(),
            "custom: change \"abc\""
        );
        assert_eq!(
            entry(TextFieldEvent::Enter("test".into())).describe(),
            "custom: enter \"test\""
        );
        assert_eq!(entry(TextFieldEvent::Focus).describe(), "custom: focus");
        assert_eq!(entry(TextFieldEvent::Blur).describe(), "custom: blur");
    }

    #[test]
    fn limit_chars_counts_characters_not_bytes() {
        assert_eq!(limit_chars("텍스트입력", 3), "텍스트");
        assert_eq!(limit_chars("ab", 16), "ab");
    }
}
