//! sthiti-eye: Presence Sampling for sthiti
//!
//! Drives an injected video source and detector on a fixed period from a
//! background task, delivering timestamped presence observations to the
//! consumer through a bounded channel. The consumer side (a display loop,
//! typically) polls observations and feeds them to the
//! [`PresenceAccumulator`](sthiti_core::PresenceAccumulator) in sthiti-core.

pub mod config;
pub mod detector;
pub mod error;
pub mod sampler;
pub mod source;

pub use config::MonitorConfig;
pub use detector::{Detection, Detector};
pub use error::EyeError;
pub use sampler::{Polled, Sampler};
pub use source::VideoSource;
