/// One recommendation card as delivered by the feed.
///
/// The ordering engine only moves these around; every field is optional and
/// exists for the front-end to paint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Book {
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub cover: Option<String>,
    pub srcset: Option<String>,
    pub sizes: Option<String>,
    pub annotation: Option<String>,
    pub read_url: Option<String>,
    /// Why the book is recommended; shown behind a spoiler.
    pub reason: Option<String>,
}

impl Book {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
