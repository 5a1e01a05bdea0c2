use instant::Instant;

/// Monotonic session clock reporting elapsed milliseconds.
///
/// Core operations take `now_ms` explicitly; front-ends read it from here once
/// per frame and once per sensor event.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    start: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}
