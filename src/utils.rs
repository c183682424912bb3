use std::sync::OnceLock;
use std::time::Instant;

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

// Monotonic, not comparable across processes.
pub fn get_cur_sec() -> f64 {
    PROCESS_START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

#[derive(Debug)]
pub struct Timer {
    last_checked: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self { last_checked: Instant::now() }
    }

    pub fn check(&mut self) {
        self.last_checked = Instant::now();
    }

    pub fn elapsed(&self) -> f64 {
        self.last_checked.elapsed().as_secs_f64()
    }

    pub fn check_get_elapsed(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = (now - self.last_checked).as_secs_f64();
        self.last_checked = now;
        elapsed
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
