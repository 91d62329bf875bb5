use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct ConnTimer(Instant);

/// Elapsed time for log lines: milliseconds below one second, seconds otherwise.
#[derive(Clone, Copy, Debug)]
pub struct ConnDuration(Duration);

impl ConnTimer {
    pub fn now() -> Self {
        ConnTimer(Instant::now())
    }

    pub fn elapsed(&self) -> ConnDuration {
        ConnDuration(self.0.elapsed())
    }
}

impl Display for ConnDuration {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let micros = self.0.as_micros();
        if self.0.as_secs() == 0 {
            write!(f, "{}.{:03} ms", micros / 1_000, micros % 1_000)
        } else {
            write!(f, "{}.{:06} s", self.0.as_secs(), self.0.subsec_micros())
        }
    }
}
