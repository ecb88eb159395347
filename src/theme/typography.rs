//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    /// Field text size
    pub const TEXT_SM: f32 = 14.0;
}
