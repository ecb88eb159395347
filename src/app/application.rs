//! Application - App Initialization and Window Management
//!
//! Main entry point for the playground window.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::{Theme, ThemeMode};
use tracing::{error, info};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::states::{
    LocaleAction, TfAppState, TfGlobalStore, ThemeAction, save_app_state,
    update_app_state_and_save,
};
use crate::views::Playground;

actions!(text_field, [Quit]);

fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
}

fn save_on_exit(cx: &App) {
    let state = cx.global::<TfGlobalStore>().value(cx);
    if let Err(e) = save_app_state(&state) {
        error!(error = %e, "Failed to save state on exit");
    }
}

/// Run the playground application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| {
            save_on_exit(cx);
            cx.quit();
        });
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        cx.on_action(|action: &LocaleAction, cx: &mut App| {
            let code = action.code();
            info!(locale = code, "Switching locale");
            update_app_state_and_save(cx, "set_locale", move |state, _| {
                state.set_locale(code.to_string());
            });
        });

        cx.on_action(|action: &ThemeAction, cx: &mut App| {
            let mode = match action {
                ThemeAction::Light => Some(ThemeMode::Light),
                ThemeAction::Dark => Some(ThemeMode::Dark),
                ThemeAction::System => None,
            };
            apply_theme(mode, cx);
            update_app_state_and_save(cx, "set_theme", move |state, _| {
                state.set_theme(mode);
            });
        });

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                save_on_exit(cx);
                cx.quit();
            }
        })
        .detach();

        // Load persisted state; a broken config file falls back to defaults
        let app_state = TfAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load config, using defaults");
            TfAppState::new()
        });
        info!(locale = app_state.locale(), "Loaded app state");

        apply_theme(app_state.theme(), cx);

        let bounds = app_state.bounds().copied().unwrap_or_else(|| {
            Bounds::centered(
                None,
                gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });

        let app_state = cx.new(|_| app_state);
        cx.set_global(TfGlobalStore::new(app_state));

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Text Field Playground")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Playground::new(window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open playground window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
