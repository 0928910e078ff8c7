use std::io::{self, IsTerminal, Write};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use shelf_core::{Effect, Msg};
use shelf_engine::{
    Clock, EngineEvent, EngineHandle, EventSink, FeedFetcher, FeedLocation, FetchSettings,
};
use shelf_logging::{shelf_debug, shelf_error, shelf_info};

use super::ui;

/// Feeds engine events back into the dispatch loop as messages.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(engine_event_to_msg(event));
    }
}

pub(crate) fn engine_event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FeedLoaded { books, now_ms } => Msg::FeedLoaded { books, now_ms },
        EngineEvent::FeedFailed(error) => Msg::FeedFailed(error.to_load_failure()),
        EngineEvent::Tick { now_ms } => Msg::Tick { now_ms },
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        location: FeedLocation,
        settings: FetchSettings,
        clock: Arc<dyn Clock>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let engine = EngineHandle::spawn(
            location,
            Arc::new(FeedFetcher::new(settings)),
            clock,
            Arc::new(MsgSink { tx: msg_tx }),
        );
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, out: &mut impl Write) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::LoadFeed => {
                    shelf_info!("LoadFeed");
                    self.engine.load_feed();
                }
                Effect::StartTicker { interval_ms } => {
                    shelf_info!("StartTicker interval_ms={}", interval_ms);
                    self.engine.start_ticker(Duration::from_millis(interval_ms));
                }
                Effect::StopTicker => {
                    shelf_info!("StopTicker");
                    self.engine.stop_ticker();
                }
                Effect::ScrollToTop => {
                    shelf_debug!("ScrollToTop");
                    if io::stdout().is_terminal() {
                        out.write_all(ui::render::CLEAR_SCREEN.as_bytes())?;
                    }
                }
                Effect::ReportLoadFailure { message } => {
                    shelf_error!("Feed unavailable: {}", message);
                }
            }
        }
        Ok(())
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }
}
