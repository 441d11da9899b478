//! Presence detector seam.
//!
//! The detection model is a black box behind this trait: it gets a frame and
//! answers with how many faces it saw, optionally handing back an annotated
//! copy of the frame for display. The detector is injected into the sampler
//! so tests can substitute a scripted one.

use sthiti_core::Frame;

use crate::error::EyeError;

/// Result of running the detector on one frame.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Number of faces found in the frame.
    pub count: u32,
    /// Frame with detection overlays, for display only.
    pub annotated: Option<Frame>,
}

impl Detection {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            annotated: None,
        }
    }

    pub fn with_annotated(count: u32, annotated: Frame) -> Self {
        Self {
            count,
            annotated: Some(annotated),
        }
    }
}

/// Face-count detector run once per sampling tick.
#[cfg_attr(test, mockall::automock)]
pub trait Detector: Send {
    /// Run detection on one frame.
    ///
    /// An error here is fatal to the sampling run: the sampler stops and
    /// its observation channel closes.
    fn detect(&mut self, frame: &Frame) -> Result<Detection, EyeError>;
}
