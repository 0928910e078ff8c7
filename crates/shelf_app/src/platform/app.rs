use std::io::{self, Write};
use std::sync::{mpsc, Arc};

use anyhow::Context;
use shelf_core::{update, Msg, ShelfState};
use shelf_engine::{Clock, FeedLocation, FetchSettings, SystemClock};
use shelf_logging::shelf_info;

use super::effects::EffectRunner;
use super::{config, logging, ui, Args};

pub fn run_app(args: Args) -> anyhow::Result<()> {
    logging::initialize(args.log);

    let config = config::resolve_config(&args.config, args.page_size)?;
    let location = FeedLocation::parse(&args.feed).context("invalid feed location")?;
    shelf_info!("Starting shelf: feed={} config={:?}", location, config);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let runner = EffectRunner::new(
        location,
        FetchSettings::default(),
        clock.clone(),
        msg_tx.clone(),
    );
    ui::input::spawn_reader(msg_tx);

    let mut app = App {
        state: ShelfState::new(config),
        runner,
        out: io::stdout(),
    };

    // Every message, whether from the keyboard or the engine, is applied here
    // one at a time.
    app.dispatch(Msg::Mounted {
        now_ms: clock.now_ms(),
    })?;
    while app.state.is_mounted() {
        let Ok(msg) = msg_rx.recv() else {
            break;
        };
        app.dispatch(msg)?;
    }

    app.runner.shutdown();
    shelf_info!("Shelf unmounted");
    Ok(())
}

struct App {
    state: ShelfState,
    runner: EffectRunner,
    out: io::Stdout,
}

impl App {
    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.runner
            .run(effects, &mut self.out)
            .context("failed to write to terminal")?;
        if was_dirty {
            self.out
                .write_all(ui::render::render(&view).as_bytes())
                .and_then(|()| self.out.flush())
                .context("failed to write to terminal")?;
        }
        Ok(())
    }
}
