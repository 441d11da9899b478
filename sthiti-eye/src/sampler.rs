//! Background presence sampling.
//!
//! The sampler runs one capture+detect cycle per period on a spawned task
//! and publishes observations into a bounded ring. The consumer polls with a
//! bounded wait, so detector latency never blocks the display loop and a
//! lagging consumer costs the oldest queued observations, never unbounded
//! memory.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use sthiti_core::Observation;

use crate::config::MonitorConfig;
use crate::detector::Detector;
use crate::error::EyeError;
use crate::source::VideoSource;

/// Outcome of one [`Sampler::poll`] call.
#[derive(Debug, Clone)]
pub enum Polled {
    /// The next observation, in production order.
    Ready(Observation),
    /// Nothing arrived within the wait; the sampler may still be running.
    Empty,
    /// The sampler has stopped and every queued observation was consumed.
    Closed,
}

/// Everything the sampling task takes ownership of when it starts.
struct Components {
    source: Box<dyn VideoSource>,
    detector: Box<dyn Detector>,
    sender: broadcast::Sender<Observation>,
}

/// Periodic presence sampler.
///
/// Single producer (the spawned task), single consumer (whoever holds the
/// sampler and calls [`poll`](Self::poll)). The task owns the video source
/// and detector, so every exit path (stop, failure, drop) releases the
/// capture device.
pub struct Sampler {
    period: Duration,
    epoch: Instant,
    is_running: Arc<RwLock<bool>>,
    receiver: broadcast::Receiver<Observation>,
    components: Option<Components>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl Sampler {
    /// Create a sampler from a validated configuration and injected
    /// collaborators. Rejects invalid configuration before any resource is
    /// touched.
    pub fn new(
        config: &MonitorConfig,
        source: Box<dyn VideoSource>,
        detector: Box<dyn Detector>,
    ) -> Result<Self, EyeError> {
        config.validate().map_err(EyeError::Config)?;

        let (sender, receiver) = broadcast::channel(config.queue_capacity);

        Ok(Self {
            period: Duration::from_secs_f64(config.sample_period_secs),
            epoch: Instant::now(),
            is_running: Arc::new(RwLock::new(false)),
            receiver,
            components: Some(Components {
                source,
                detector,
                sender,
            }),
            task: None,
        })
    }

    /// Start the sampling loop on its own task.
    ///
    /// Idempotent while running. A sampler that has been stopped stays
    /// stopped (its source and detector were consumed by the finished run);
    /// construct a new sampler to restart monitoring.
    pub fn start(&mut self) {
        {
            let mut is_running = self.is_running.write();
            if *is_running {
                debug!("Sampler already running, start ignored");
                return;
            }
            let Some(components) = self.components.take() else {
                warn!("Sampler already stopped; create a new one to restart");
                return;
            };
            *is_running = true;

            let period = self.period;
            let epoch = self.epoch;
            let run_flag = self.is_running.clone();
            self.task = Some(tokio::spawn(async move {
                sample_loop(components, period, epoch, run_flag).await;
            }));
        }
        info!("Sampler started with period {:?}", self.period);
    }

    /// Wait up to `wait` for the next observation.
    ///
    /// Returns [`Polled::Empty`] when nothing arrived in time and
    /// [`Polled::Closed`] once the sampler has stopped and the queue is
    /// drained. Never blocks past `wait`, so the consumer can always exit
    /// after `stop()`.
    pub async fn poll(&mut self, wait: Duration) -> Polled {
        loop {
            match tokio::time::timeout(wait, self.receiver.recv()).await {
                Ok(Ok(observation)) => return Polled::Ready(observation),
                Ok(Err(broadcast::error::RecvError::Lagged(skipped))) => {
                    warn!(
                        "Consumer lagging, dropped the {} oldest observations",
                        skipped
                    );
                    continue;
                }
                Ok(Err(broadcast::error::RecvError::Closed)) => return Polled::Closed,
                Err(_) => return Polled::Empty,
            }
        }
    }

    /// Discard every currently queued observation and return how many were
    /// thrown away (including any the ring had already overwritten).
    ///
    /// Best-effort with respect to concurrent production: observations
    /// published after the drain are kept. Used after an alert so the next
    /// measurement window does not start on stale data.
    pub fn drain(&mut self) -> usize {
        let mut discarded = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(_) => discarded += 1,
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    discarded += skipped as usize;
                }
                Err(_) => break,
            }
        }
        if discarded > 0 {
            debug!("Drained {} stale observations", discarded);
        }
        discarded
    }

    /// Signal the sampling loop to stop and wait for it to finish its
    /// current tick. On return no further observations will be produced and
    /// the video source has been released.
    pub async fn stop(&mut self) {
        *self.is_running.write() = false;
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                error!("Sampler task join failed: {}", e);
            }
        }
        info!("Sampler stopped");
    }

    /// Whether the sampling loop is currently running.
    pub fn is_running(&self) -> bool {
        *self.is_running.read()
    }
}

/// The sampling loop body. Owns the source, detector, and the sending half
/// of the channel; dropping them on exit releases the capture device and
/// closes the queue so the consumer observes [`Polled::Closed`].
async fn sample_loop(
    mut components: Components,
    period: Duration,
    epoch: Instant,
    run_flag: Arc<RwLock<bool>>,
) {
    while *run_flag.read() {
        let tick_start = Instant::now();

        match components.source.read() {
            Ok(frame) => {
                let detection = match components.detector.detect(&frame) {
                    Ok(detection) => detection,
                    Err(e) => {
                        error!("Detector failed, stopping sampler: {}", e);
                        break;
                    }
                };

                // Stamp after detection completes, so the timestamp reflects
                // when the measurement became valid.
                let timestamp = epoch.elapsed().as_secs_f64();
                let observation = match detection.annotated {
                    Some(annotated) => {
                        Observation::with_frame(timestamp, detection.count, annotated)
                    }
                    None => Observation::new(timestamp, detection.count),
                };

                if components.sender.send(observation).is_err() {
                    warn!("Observation receiver dropped, stopping sampler");
                    break;
                }
            }
            Err(e) => {
                // Transient camera trouble: skip this tick, keep sampling.
                warn!("Frame acquisition failed, skipping tick: {}", e);
            }
        }

        // Sleep whatever remains of the period. A detection that overran the
        // period means the next tick starts immediately.
        let elapsed = tick_start.elapsed();
        if elapsed < period {
            tokio::time::sleep(period - elapsed).await;
        }
    }

    *run_flag.write() = false;
    info!("Sampling loop finished, releasing video source");
}
