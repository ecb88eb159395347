//! Application State
//!
//! Persisted playground state: locale, theme and window bounds.

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_LOCALE};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    Ko,
    En,
}

impl LocaleAction {
    /// Locale code stored in the config file
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::Ko => "ko",
            LocaleAction::En => "en",
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Reduce a system locale such as `ko-KR` or `en_US` to its language code
pub fn language_code(raw: &str) -> Option<String> {
    raw.split(['-', '_'])
        .next()
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_lowercase)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TfAppState {
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
}

impl TfAppState {
    /// Load state from the config file in the platform config directory
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        let mut state = Self::load_from(&path)?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = language_code(&Locale::current().to_string());
        }

        Ok(state)
    }

    /// Load state from `path`; an empty file yields the default state
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(state)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some(locale) if !locale.is_empty() => locale,
            _ => DEFAULT_LOCALE,
        }
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<TfGlobalStore>()`
#[derive(Clone)]
pub struct TfGlobalStore {
    app_state: Entity<TfAppState>,
}

impl TfGlobalStore {
    /// Create a new global store
    pub fn new(app_state: Entity<TfAppState>) -> Self {
        Self { app_state }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<TfAppState> {
        self.app_state.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a TfAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut TfAppState, &mut Context<TfAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }

    /// Get a clone of current app state
    pub fn value(&self, cx: &App) -> TfAppState {
        self.app_state.read(cx).clone()
    }
}

impl Global for TfGlobalStore {}

// ==================== Persistence ====================

/// Save app state to the platform config file
pub fn save_app_state(state: &TfAppState) -> Result<()> {
    let path = get_config_path()?;
    save_app_state_to(state, &path)
}

/// Save app state to `path`
pub fn save_app_state_to(state: &TfAppState, path: &Path) -> Result<()> {
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut TfAppState, &App) + Send + 'static + Clone,
{
    let store = cx.global::<TfGlobalStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            cx.notify();
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}
