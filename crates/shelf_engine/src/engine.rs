use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use shelf_core::Book;
use shelf_logging::{shelf_error, shelf_info, shelf_warn};

use crate::decode::decode_feed;
use crate::fetch::{FeedLocation, Fetcher};
use crate::ticker::{EventSink, Ticker};
use crate::{Clock, EngineEvent, FeedError};

enum EngineCommand {
    LoadFeed,
    StartTicker { period: Duration },
    StopTicker,
    Shutdown,
}

/// Fetches and decodes the feed in one go.
pub async fn load_feed(
    fetcher: &dyn Fetcher,
    location: &FeedLocation,
) -> Result<Vec<Book>, FeedError> {
    let bytes = fetcher.fetch(location).await?;
    decode_feed(&bytes)
}

/// Background IO thread with its own tokio runtime. Results and ticks are
/// reported through the [`EventSink`] given at spawn time.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    thread: Option<JoinHandle<()>>,
}

impl EngineHandle {
    pub fn spawn(
        location: FeedLocation,
        fetcher: Arc<dyn Fetcher>,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        let thread = thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    shelf_error!("failed to start engine runtime: {}", err);
                    return;
                }
            };
            let location = Arc::new(location);
            let mut ticker: Option<Ticker> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::LoadFeed => {
                        let fetcher = fetcher.clone();
                        let clock = clock.clone();
                        let sink = sink.clone();
                        let location = location.clone();
                        runtime.spawn(async move {
                            let event = match load_feed(fetcher.as_ref(), &location).await {
                                Ok(books) => {
                                    shelf_info!("loaded {} items from {}", books.len(), location);
                                    EngineEvent::FeedLoaded {
                                        books,
                                        now_ms: clock.now_ms(),
                                    }
                                }
                                Err(error) => {
                                    shelf_warn!("feed load from {} failed: {}", location, error);
                                    EngineEvent::FeedFailed(error)
                                }
                            };
                            sink.emit(event);
                        });
                    }
                    EngineCommand::StartTicker { period } => {
                        // Replacing the old ticker drops (and cancels) it.
                        ticker = Some(Ticker::spawn(
                            runtime.handle(),
                            clock.clone(),
                            period,
                            sink.clone(),
                        ));
                    }
                    EngineCommand::StopTicker => {
                        ticker = None;
                    }
                    EngineCommand::Shutdown => break,
                }
            }

            drop(ticker);
            runtime.shutdown_timeout(Duration::from_millis(500));
        });

        Self {
            cmd_tx,
            thread: Some(thread),
        }
    }

    pub fn load_feed(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadFeed);
    }

    pub fn start_ticker(&self, period: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::StartTicker { period });
    }

    pub fn stop_ticker(&self) {
        let _ = self.cmd_tx.send(EngineCommand::StopTicker);
    }

    /// Stops the ticker, abandons in-flight loads and joins the IO thread.
    pub fn shutdown(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
