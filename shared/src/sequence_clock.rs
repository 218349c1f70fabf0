use std::time::Duration;

use crate::{backends::Instant, types::{Sequence, Tick}};

/// Derives the tick count from wall-clock time elapsed since an origin instant.
#[derive(Clone, Copy, Debug)]
pub struct SequenceClock {
    origin: Instant,
    tick_duration: Duration,
}

impl SequenceClock {
    pub fn new(origin: Instant, ticks_per_second: u32) -> Self {
        Self {
            origin,
            tick_duration: tick_duration(ticks_per_second),
        }
    }

    /// Clock whose tick at `now` carries `sequence`.
    ///
    /// Used to read a remote peer whose clock was already running when its
    /// first packet arrived. Falls back to an origin of `now` if `now` is too
    /// close to the platform epoch to back-date.
    pub fn anchored(now: Instant, sequence: Sequence, ticks_per_second: u32) -> Self {
        let tick_duration = tick_duration(ticks_per_second);
        let origin = now
            .checked_sub(tick_duration * u32::from(sequence))
            .unwrap_or(now);
        Self {
            origin,
            tick_duration,
        }
    }

    pub fn origin(&self) -> &Instant {
        &self.origin
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Whole ticks elapsed at `now`. Zero for any instant before the origin.
    pub fn tick_at(&self, now: &Instant) -> Tick {
        let elapsed = now.duration_since(&self.origin);
        (elapsed.as_nanos() / self.tick_duration.as_nanos()) as Tick
    }

    /// Tick at `now` truncated onto the wrapping 16-bit ring
    pub fn sequence_at(&self, now: &Instant) -> Sequence {
        Self::sequence_of(self.tick_at(now))
    }

    pub fn sequence_of(tick: Tick) -> Sequence {
        (tick % (u64::from(u16::MAX) + 1)) as Sequence
    }
}

// Rates above one tick per nanosecond run at one tick per nanosecond
fn tick_duration(ticks_per_second: u32) -> Duration {
    (Duration::from_secs(1) / ticks_per_second.max(1)).max(Duration::from_nanos(1))
}
