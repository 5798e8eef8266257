//! Terminal progress indicator shown while the AI command runs.

use std::io::Write as _;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// A spinner drawn on stderr by a background task until [`Spinner::stop`].
#[derive(Debug)]
pub struct Spinner {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str) -> Self {
        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = tokio::spawn(spin(message.to_string(), stop_rx));
        Self { stop_tx, handle }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        if self.stop_tx.send(()).is_err() {
            debug!("Spinner task already finished");
        }
        if let Err(e) = self.handle.await {
            debug!("Spinner task failed: {e}");
        }
    }
}

async fn spin(message: String, mut stop_rx: oneshot::Receiver<()>) {
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let mut stderr = std::io::stderr();
    for frame in FRAMES.iter().cycle() {
        tokio::select! {
            _ = &mut stop_rx => break,
            _ = ticker.tick() => {
                if write!(stderr, "\r{frame} {message}").and_then(|()| stderr.flush()).is_err() {
                    break;
                }
            }
        }
    }
    if write!(stderr, "\r\x1b[2K").and_then(|()| stderr.flush()).is_err() {
        debug!("Could not clear spinner line");
    }
}
