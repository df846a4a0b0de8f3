use std::time::{Duration, Instant};

/// Prints `!log time <label> <seconds>` on stderr when dropped.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        eprintln!("!log time {} {:.3}", self.label, self.elapsed().as_secs_f64());
    }
}

/// Runs `f` under a [`Timer`] named `label`.
pub fn timed<T>(label: &'static str, f: impl FnOnce() -> T) -> T {
    let _t = Timer::new(label);
    f()
}
