use std::time::Duration;

/// Configures the caching and refetching behavior of a query.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    /// How long fetched data is considered fresh. Once this elapses, the next observer triggers
    /// a refetch. `None` means the data never goes stale on its own.
    pub stale_time: Option<Duration>,
    /// How long to keep a query's data cached after its last observer unsubscribes, before the
    /// cache entry is dropped. `None` means the entry is kept forever.
    pub cache_time: Option<Duration>,
    /// If set, the query refetches itself automatically on this interval while observed.
    pub refetch_interval: Option<Duration>,
}

impl QueryOptions {
    /// Data is considered fresh forever and is never garbage collected.
    pub fn once() -> Self {
        Self {
            stale_time: None,
            cache_time: None,
            refetch_interval: None,
        }
    }
}
