//! Primitive Components
//!
//! Basic building blocks.

pub mod text_field;
