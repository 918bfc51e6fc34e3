//! Coordinate-picker collaborator
//!
//! Authoring-time input for the relative coordinate transform: one blocking
//! wait for a pointer click that reports where the click landed and how big
//! the authoring machine's screen is. The OS-level capture itself lives
//! outside this crate; the server accepts any [`PositionPicker`]
//! implementation and reports unavailability when none is configured.

use serde::Serialize;

use crate::error::PickError;

/// One captured pointer sample, in authoring-machine pixels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "screenWidth")]
    pub screen_width: i32,
    #[serde(rename = "screenHeight")]
    pub screen_height: i32,
}

/// Blocking click capture. Implementations may take arbitrarily long; the
/// server calls this from a blocking task.
pub trait PositionPicker: Send + Sync {
    fn wait_for_click(&self) -> Result<PointerSample, PickError>;
}

/// Picker that always returns the same sample. Used in tests and headless
/// runs where no pointer hardware is available.
pub struct FixedSamplePicker(pub PointerSample);

impl PositionPicker for FixedSamplePicker {
    fn wait_for_click(&self) -> Result<PointerSample, PickError> {
        Ok(self.0)
    }
}
