//! UI Constants
//!
//! Centralized constants shared by the widget and the playground.

/// Locale used when neither the config file nor the system provides one
pub const DEFAULT_LOCALE: &str = "ko";

/// Translation key of the placeholder shown when the caller gives none
pub const PLACEHOLDER_KEY: &str = "text_field.placeholder";

/// Border width of an idle field, in pixels
pub const BORDER_WIDTH: f32 = 1.0;
/// Border width of a focused field, in pixels
pub const BORDER_WIDTH_FOCUSED: f32 = 2.0;

/// Minimum field width
pub const FIELD_MIN_WIDTH: f32 = 200.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 560.0;

/// Number of field events kept by the playground log
pub const EVENT_LOG_CAPACITY: usize = 50;

/// Config and log file names
pub const CONFIG_FILE_NAME: &str = "text-field.toml";
pub const LOG_FILE_NAME: &str = "text-field.log";
