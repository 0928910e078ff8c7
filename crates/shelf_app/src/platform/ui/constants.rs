/// Tags shown per card; the rest of the list is not painted.
pub const MAX_TAGS: usize = 3;
pub const CARD_RULE: &str = "----------------------------------------";
pub const LOADING_TEXT: &str = "Loading recommendations...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load recommendations.";
pub const EMPTY_TEXT: &str = "Nothing to recommend yet.";
pub const READ_LABEL: &str = "Read";
pub const REASON_LABEL: &str = "Recommended because...";
pub const NAV_HINT: &str = "[n]ext  [p]rev  [q]uit";
