//! View Components
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Title                          [ko][en][…]   │
//! ├──────────────────────────────────────────────┤
//! │ Default field                                │
//! │ Custom placeholder field                     │
//! │ Controlled field                             │
//! │ Submitted value                              │
//! ├──────────────────────────────────────────────┤
//! │ Event log (newest first)                     │
//! └──────────────────────────────────────────────┘
//! ```

mod playground;

pub use playground::*;
