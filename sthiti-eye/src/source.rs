//! Video source seam.
//!
//! The capture device lives behind this trait; the sampler only needs "give
//! me one frame or fail". Implementations release the device when dropped,
//! and the sampling task owns its source, so every exit path (stop, detector
//! failure, sampler dropped) releases the device.

use sthiti_core::Frame;

use crate::error::EyeError;

/// One-frame-at-a-time video source.
#[cfg_attr(test, mockall::automock)]
pub trait VideoSource: Send {
    /// Acquire one frame.
    ///
    /// Failure is transient as far as the sampler is concerned: the tick is
    /// skipped and capture is retried on the next one.
    fn read(&mut self) -> Result<Frame, EyeError>;
}
