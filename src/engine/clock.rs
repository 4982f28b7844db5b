use std::num::NonZeroU32;
use std::time::Duration;

/// Throttles a stream of frames down to a fixed tick rate.
///
/// Elapsed time is accumulated across frames; once a full tick interval has
/// built up, the frame is accepted and the accumulator starts again from
/// zero.  Any excess beyond the interval is dropped rather than carried over,
/// so a long stall produces one tick, not a burst.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    /// Create a clock that accepts `rate` frames per second
    pub(crate) fn new(rate: NonZeroU32) -> TickClock {
        let interval = Duration::from_secs(1) / rate.get();
        TickClock {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Prime the clock so that the next frame is accepted no matter how
    /// little time it reports
    pub(crate) fn arm(&mut self) {
        self.accumulated = self.interval;
    }

    /// Record a frame that arrived `elapsed` after the previous one.
    /// Returns `true` if a tick should run.
    pub(crate) fn frame(&mut self, elapsed: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// How long until a frame would be accepted
    pub(crate) fn until_tick(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }
}
