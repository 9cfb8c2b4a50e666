use chrono::{DateTime, Utc};

/// Clock seam for everything that compares against "now" (quiz windows,
/// submission lateness, dashboard counts). Injected so tests can pin time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
