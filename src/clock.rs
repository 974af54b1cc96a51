//! Timestamp source for persisted records.

use alloc::string::String;

/// Supplies the timestamp written into game records.
pub trait Clock {
    /// Returns the current time, formatted for storage.
    fn now(&self) -> String;
}

impl<F> Clock for F
where
    F: Fn() -> String,
{
    fn now(&self) -> String {
        self()
    }
}

/// Wall clock rendering whole seconds since the Unix epoch.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> String {
        use alloc::string::ToString;
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
            .to_string()
    }
}
