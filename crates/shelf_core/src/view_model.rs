use crate::{Book, LoadStatus, WindowEpoch};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShelfViewModel {
    pub load: LoadStatus,
    /// Cards on the current page, in display order.
    pub items: Vec<Book>,
    pub current_page: usize,
    pub total_pages: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub page_indicator: String,
    pub window_epoch: Option<WindowEpoch>,
    pub dirty: bool,
}
