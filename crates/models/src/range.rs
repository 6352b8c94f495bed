/// Inclusive timestamp window used by the metric and history range reads.
/// Timestamps are whatever the caller stored; nothing here reads a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Every timestamp.
    pub fn all() -> Self {
        Self { start: i64::MIN, end: i64::MAX }
    }

    /// From `start` onwards.
    pub fn since(start: i64) -> Self {
        Self { start, end: i64::MAX }
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}
