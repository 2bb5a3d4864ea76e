use chrono::{DateTime, Utc};
use std::time::Instant;

/// Source of wall-clock time (note timestamps) and monotonic time (popup deadlines).
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
    fn instant(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test_utils"))]
mod manual {
    use super::Clock;
    use chrono::{DateTime, Utc};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    /// A clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Rc<Cell<DateTime<Utc>>>,
        instant: Rc<Cell<Instant>>,
    }

    impl ManualClock {
        pub fn new(now: DateTime<Utc>) -> Self {
            Self {
                now: Rc::new(Cell::new(now)),
                instant: Rc::new(Cell::new(Instant::now())),
            }
        }

        pub fn advance(&self, by: Duration) {
            self.instant.set(self.instant.get() + by);
            if let Ok(delta) = chrono::Duration::from_std(by) {
                self.now.set(self.now.get() + delta);
            }
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }

        fn instant(&self) -> Instant {
            self.instant.get()
        }
    }
}
