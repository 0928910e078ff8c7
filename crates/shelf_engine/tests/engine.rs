use std::sync::{mpsc, Arc};
use std::time::Duration;

use shelf_engine::{
    ChannelEventSink, EngineEvent, EngineHandle, FeedError, FeedLocation, Fetcher, ManualClock,
};

struct StaticFetcher {
    result: Result<Vec<u8>, FeedError>,
}

#[async_trait::async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, _location: &FeedLocation) -> Result<Vec<u8>, FeedError> {
        self.result.clone()
    }
}

fn engine_with(result: Result<Vec<u8>, FeedError>) -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::spawn(
        FeedLocation::File("books.json".into()),
        Arc::new(StaticFetcher { result }),
        Arc::new(ManualClock::new(1_700_000_000_000)),
        Arc::new(ChannelEventSink::new(tx)),
    );
    (engine, rx)
}

#[test]
fn load_reports_books_with_clock_time() {
    let (mut engine, rx) = engine_with(Ok(br#"[{"title":"A"},{"title":"B"}]"#.to_vec()));
    engine.load_feed();

    let event = rx.recv_timeout(Duration::from_secs(5)).expect("event");
    match event {
        EngineEvent::FeedLoaded { books, now_ms } => {
            assert_eq!(books.len(), 2);
            assert_eq!(now_ms, 1_700_000_000_000);
        }
        other => panic!("unexpected event {other:?}"),
    }
    engine.shutdown();
}

#[test]
fn load_failure_is_reported_once() {
    let (mut engine, rx) = engine_with(Err(FeedError::HttpStatus(500)));
    engine.load_feed();

    let event = rx.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(event, EngineEvent::FeedFailed(FeedError::HttpStatus(500)));
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    engine.shutdown();
}

#[test]
fn malformed_payload_is_reported_as_malformed() {
    let (mut engine, rx) = engine_with(Ok(b"{\"not\": \"a list\"}".to_vec()));
    engine.load_feed();

    match rx.recv_timeout(Duration::from_secs(5)).expect("event") {
        EngineEvent::FeedFailed(err) => assert!(err.is_malformed()),
        other => panic!("unexpected event {other:?}"),
    }
    engine.shutdown();
}

#[test]
fn ticker_runs_until_stopped() {
    let (mut engine, rx) = engine_with(Ok(b"[]".to_vec()));
    engine.start_ticker(Duration::from_millis(20));

    let first = rx.recv_timeout(Duration::from_secs(5)).expect("tick");
    assert_eq!(
        first,
        EngineEvent::Tick {
            now_ms: 1_700_000_000_000
        }
    );

    engine.stop_ticker();
    std::thread::sleep(Duration::from_millis(100));
    while rx.try_recv().is_ok() {}
    std::thread::sleep(Duration::from_millis(100));
    assert!(rx.try_recv().is_err());
    engine.shutdown();
}

#[test]
fn shutdown_closes_the_event_stream() {
    let (mut engine, rx) = engine_with(Ok(b"[]".to_vec()));
    engine.start_ticker(Duration::from_millis(10));
    engine.shutdown();

    // The sink (and its sender) is dropped with the engine thread.
    while rx.try_recv().is_ok() {}
    assert_eq!(
        rx.recv_timeout(Duration::from_secs(5)),
        Err(mpsc::RecvTimeoutError::Disconnected)
    );
}
