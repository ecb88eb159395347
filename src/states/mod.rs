//! State Management Layer
//!
//! Global playground state using GPUI's Entity system.
//!
//! ```text
//! UI Action → State Method → notify → UI Refresh
//!                          └→ background save
//! ```

mod app;
mod i18n;

pub use app::*;
pub use i18n::*;
