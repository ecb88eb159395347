//! TextField Component
//!
//! A single-line text field with a localized default placeholder, caller
//! class names, change/enter/focus callbacks and a focus border.
//!
//! The behavior lives in [`TextFieldState`], which has no GPUI window
//! dependency. [`TextField`] is the GPUI view around it.

pub mod class_list;
pub mod props;
pub mod state;
pub mod view;

pub use class_list::ClassList;
pub use props::TextFieldProps;
pub use state::{FieldStyle, TextFieldEvent, TextFieldState, ValueMode, default_placeholder};
pub use view::{TextField, text_field};
