//! ClassList - Ordered class tokens attached to a field element

use std::fmt;

use gpui::SharedString;

/// Base token every field carries
pub const BASE_CLASS: &str = "text-field";
/// Token added while the field holds focus
pub const FOCUSED_CLASS: &str = "text-field--focused";
/// Token added while the field is disabled
pub const DISABLED_CLASS: &str = "text-field--disabled";

/// Ordered, de-duplicated list of class tokens.
///
/// Base tokens always come first and caller tokens follow. Caller tokens are
/// kept as given; one that repeats a base token is skipped while iterating, so
/// it shows up again once that base token is switched off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    base: Vec<SharedString>,
    extra: Vec<SharedString>,
}

impl ClassList {
    /// Create a class list holding only the base token
    pub fn new() -> Self {
        Self {
            base: vec![SharedString::new_static(BASE_CLASS)],
            extra: Vec::new(),
        }
    }

    /// Replace the caller-supplied tokens.
    ///
    /// `class_name` is split on whitespace, like an HTML class attribute.
    pub fn set_extra(&mut self, class_name: Option<&str>) {
        self.extra.clear();
        let Some(class_name) = class_name else {
            return;
        };

        for token in class_name.split_whitespace() {
            if self.extra.iter().any(|t| t.as_str() == token) {
                continue;
            }
            self.extra.push(SharedString::from(token.to_string()));
        }
    }

    /// Toggle a base token such as [`FOCUSED_CLASS`]
    pub(crate) fn set_state(&mut self, token: &'static str, on: bool) {
        let present = self.in_base(token);
        if on && !present {
            self.base.push(SharedString::new_static(token));
        } else if !on && present {
            self.base.retain(|t| t.as_str() != token);
        }
    }

    fn in_base(&self, token: &str) -> bool {
        self.base.iter().any(|t| t.as_str() == token)
    }

    /// Whether the list holds `token`
    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|t| t.as_str() == token)
    }

    /// Iterate over all tokens, base tokens first
    pub fn iter(&self) -> impl Iterator<Item = &SharedString> {
        self.base.iter().chain(self.extra())
    }

    /// Caller-supplied tokens not already present as base tokens
    pub fn extra(&self) -> impl Iterator<Item = &SharedString> {
        self.extra.iter().filter(|t| !self.in_base(t))
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.base.len() + self.extra().count()
    }

    /// Whether the list is empty (never true for a field's list)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}
