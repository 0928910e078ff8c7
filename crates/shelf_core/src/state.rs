use shelf_logging::{shelf_debug, shelf_warn};

use crate::config::ShelfConfig;
use crate::item::Book;
use crate::pagination::Pagination;
use crate::scheduler::RefreshScheduler;
use crate::shuffle::shuffle_deterministic;
use crate::view_model::ShelfViewModel;
use crate::window::{ShuffleWindow, WindowEpoch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Mounted,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailureKind {
    /// The feed could not be fetched (network, status, IO).
    Unavailable,
    /// The feed arrived but is not a sequence of records.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: LoadFailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded {
        count: usize,
    },
    Failed(LoadFailure),
}

/// Controller state for one mounted widget.
///
/// Only [`crate::update`] mutates it. The raw collection is replaced wholesale
/// on load; the view collection is rebuilt from it on every window change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfState {
    config: ShelfConfig,
    window: ShuffleWindow,
    lifecycle: Lifecycle,
    load: LoadStatus,
    raw: Vec<Book>,
    view: Vec<Book>,
    pagination: Pagination,
    scheduler: Option<RefreshScheduler>,
    dirty: bool,
}

impl Default for ShelfState {
    fn default() -> Self {
        Self::new(ShelfConfig::default())
    }
}

impl ShelfState {
    pub fn new(config: ShelfConfig) -> Self {
        Self {
            window: config.window(),
            pagination: Pagination::new(config.page_size),
            config,
            lifecycle: Lifecycle::Created,
            load: LoadStatus::Pending,
            raw: Vec::new(),
            view: Vec::new(),
            scheduler: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> ShelfViewModel {
        ShelfViewModel {
            load: self.load.clone(),
            items: self.pagination.page(&self.view).to_vec(),
            current_page: self.pagination.current_page(),
            total_pages: self.pagination.total_pages(),
            can_go_previous: self.pagination.can_go_previous(),
            can_go_next: self.pagination.can_go_next(),
            page_indicator: self.pagination.indicator(),
            window_epoch: self.window_epoch(),
            dirty: self.dirty,
        }
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    pub fn raw_collection(&self) -> &[Book] {
        &self.raw
    }

    pub fn view_collection(&self) -> &[Book] {
        &self.view
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Epoch the current view collection was shuffled for.
    pub fn window_epoch(&self) -> Option<WindowEpoch> {
        self.scheduler.map(|s| s.last_epoch())
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mount(&mut self, now_ms: i64) -> bool {
        if self.lifecycle != Lifecycle::Created {
            return false;
        }
        self.lifecycle = Lifecycle::Mounted;
        self.scheduler = Some(RefreshScheduler::new(self.window, now_ms));
        self.mark_dirty();
        true
    }

    pub(crate) fn unmount(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Unmounted {
            return false;
        }
        self.lifecycle = Lifecycle::Unmounted;
        true
    }

    /// Installs a freshly loaded collection and shuffles it for the window
    /// containing `now_ms`.
    pub(crate) fn replace_collection(&mut self, books: Vec<Book>, now_ms: i64) {
        let epoch = self.window.epoch(now_ms);
        let mut scheduler = self
            .scheduler
            .unwrap_or_else(|| RefreshScheduler::new(self.window, now_ms));
        scheduler.mark_applied(epoch);
        self.scheduler = Some(scheduler);
        self.load = LoadStatus::Loaded { count: books.len() };
        self.raw = books;
        self.reshuffle(epoch);
    }

    pub(crate) fn fail_load(&mut self, failure: LoadFailure) {
        shelf_warn!("feed load failed ({:?}): {}", failure.kind, failure.message);
        self.raw = Vec::new();
        self.view = Vec::new();
        self.pagination.reconcile(0);
        self.load = LoadStatus::Failed(failure);
        self.mark_dirty();
    }

    /// Polls the refresh scheduler; on a window change rebuilds the view and
    /// returns the new epoch.
    pub(crate) fn refresh_if_window_changed(&mut self, now_ms: i64) -> Option<WindowEpoch> {
        let epoch = self.scheduler.as_mut()?.poll(now_ms)?;
        self.reshuffle(epoch);
        Some(epoch)
    }

    /// Rebuilds the view collection for `epoch`. The page ordinal survives;
    /// it is only clamped if the new view has fewer pages.
    fn reshuffle(&mut self, epoch: WindowEpoch) {
        let seed = self.window.seed_for(epoch);
        self.view = shuffle_deterministic(&self.raw, seed);
        let kept_page = self.pagination.current_page();
        self.pagination.reconcile(self.view.len());
        shelf_debug!(
            "reshuffled {} items for epoch {} (seed {:#010x}), page {} -> {} of {}",
            self.view.len(),
            epoch,
            seed,
            kept_page,
            self.pagination.current_page(),
            self.pagination.total_pages()
        );
        self.mark_dirty();
    }

    pub(crate) fn go_next(&mut self) -> bool {
        let moved = self.pagination.go_next();
        if moved {
            self.mark_dirty();
        }
        moved
    }

    pub(crate) fn go_previous(&mut self) -> bool {
        let moved = self.pagination.go_previous();
        if moved {
            self.mark_dirty();
        }
        moved
    }
}
