//! Shared data model for the sthiti workspace

use bytes::Bytes;

/// A captured (optionally annotated) video frame.
///
/// The pixel payload is display-only as far as the core is concerned; it is
/// carried in a shared buffer so observations stay cheap to clone through
/// the delivery channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Bytes,
}

impl Frame {
    pub fn new(width: u32, height: u32, data: Bytes) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

/// One timestamped presence measurement produced by a sampling tick.
///
/// `timestamp` is monotonic seconds taken after detection completed, so it
/// reflects when the measurement became valid. The annotated frame, when
/// present, exists purely for display.
#[derive(Debug, Clone)]
pub struct Observation {
    pub timestamp: f64,
    pub presence_count: u32,
    pub frame: Option<Frame>,
}

impl Observation {
    pub fn new(timestamp: f64, presence_count: u32) -> Self {
        Self {
            timestamp,
            presence_count,
            frame: None,
        }
    }

    pub fn with_frame(timestamp: f64, presence_count: u32, frame: Frame) -> Self {
        Self {
            timestamp,
            presence_count,
            frame: Some(frame),
        }
    }

    /// Polarity of this observation: at least one detection means present.
    pub fn present(&self) -> bool {
        self.presence_count > 0
    }
}
