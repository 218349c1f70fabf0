use std::time::Duration;

/// Point in time used to drive sequence clocks and negotiation
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    inner: std::time::Instant,
}

impl Instant {
    pub fn now() -> Self {
        Self {
            inner: std::time::Instant::now(),
        }
    }

    /// Time elapsed between `earlier` and `self`, zero if `earlier` is later
    pub fn duration_since(&self, earlier: &Instant) -> Duration {
        self.inner.saturating_duration_since(earlier.inner)
    }

    pub fn add(&self, duration: Duration) -> Self {
        Self {
            inner: self.inner + duration,
        }
    }

    /// `None` if the result would precede the platform clock's epoch
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        Some(Self {
            inner: self.inner.checked_sub(duration)?,
        })
    }

    pub fn add_millis(&self, millis: u64) -> Self {
        self.add(Duration::from_millis(millis))
    }
}
