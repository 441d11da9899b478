//! Basic example of driving a sthiti monitoring session.
//!
//! Wires a synthetic camera and a scripted detector into the sampler, feeds
//! the observations to the presence accumulator, and applies the usual
//! driving-loop policy: show the counters, and once accumulated present time
//! crosses the alert threshold, raise the alert, drop whatever piled up in
//! the queue, and start a fresh measurement window.

use std::time::Duration;

use bytes::Bytes;
use sthiti_core::{Frame, PresenceAccumulator};
use sthiti_eye::{Detection, Detector, EyeError, MonitorConfig, Polled, Sampler, VideoSource};
use tracing::{info, warn};

/// Stand-in for a webcam: hands back the same gray frame forever.
struct SyntheticCamera;

impl VideoSource for SyntheticCamera {
    fn read(&mut self) -> Result<Frame, EyeError> {
        Ok(Frame::new(4, 4, Bytes::from_static(&[128u8; 48])))
    }
}

/// Scripted detector: mostly one face, with a short look-away every couple
/// of seconds that the debounce should swallow.
struct ScriptedDetector {
    tick: u64,
}

impl Detector for ScriptedDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Detection, EyeError> {
        self.tick += 1;
        let count = if self.tick % 40 < 2 { 0 } else { 1 };
        Ok(Detection::new(count))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Short periods and thresholds so the demo plays out in seconds rather
    // than the half-hour defaults.
    let config = MonitorConfig {
        sample_period_secs: 0.05,
        queue_capacity: 64,
        alert_threshold_secs: 5.0,
    };

    let mut sampler = Sampler::new(
        &config,
        Box::new(SyntheticCamera),
        Box::new(ScriptedDetector { tick: 0 }),
    )?;
    let mut accumulator = PresenceAccumulator::with_debounce(0.5)?;

    sampler.start();
    info!("Monitoring started; press Ctrl+C to stop");

    let mut alerts = 0;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            polled = sampler.poll(Duration::from_millis(200)) => match polled {
                Polled::Ready(observation) => {
                    accumulator.observe(observation.timestamp, observation.present())?;
                    info!(
                        "faces: {}  present: {:.2}s  absent: {:.2}s",
                        observation.presence_count,
                        accumulator.present_time(),
                        accumulator.absent_time(),
                    );

                    if accumulator.present_time() > config.alert_threshold_secs {
                        warn!("You have been sitting for a while, stand up and have a rest");
                        let discarded = sampler.drain();
                        accumulator.clear();
                        info!("Alert acknowledged, {} stale observations dropped", discarded);

                        alerts += 1;
                        if alerts >= 2 {
                            break;
                        }
                    }
                }
                Polled::Empty => continue,
                Polled::Closed => break,
            },
        }
    }

    sampler.stop().await;
    info!("Monitoring stopped");
    Ok(())
}
