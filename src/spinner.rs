//! Loading indicator shown while a question is in flight.

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Crystal-ball phases.
const FRAMES: &[&str] = &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];

const INTERVAL: Duration = Duration::from_millis(120);

/// A spinner running in a background task, drawn on stderr.
///
/// Dropping it without [`Spinner::stop`] leaves the task running until the
/// runtime shuts down.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: tokio::sync::watch::Sender<bool>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let (cancel_tx, mut cancel_rx) = tokio::sync::watch::channel(false);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                // \x1b[2K clears the line, \r returns to its start
                eprint!("\x1b[2K\r{frame} {message}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Stop and clear the line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}
