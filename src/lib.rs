//! Text Field Library
//!
//! A single-line GPUI text field with a localized default placeholder, caller
//! class names, change/enter/focus callbacks and a focus border, plus the
//! playground application that exercises it.

rust_i18n::i18n!("locales", fallback = "ko");

pub mod app;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
pub mod views;
