use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps frames at least `period` apart.
pub struct FramePacer {
    period: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FramePacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            frame_timer: Instant::now(),
            frametime_smoothed: period.as_secs_f64(),
        }
    }

    /// Smoothed frames per second actually achieved.
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Sleeps for whatever is left of the current frame and starts the next one.
    pub fn wait(&mut self) {
        let before_wait = self.frame_timer.elapsed();
        if self.period > before_wait {
            sleep(self.period - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_keeps_period() {
        let period = Duration::from_millis(20);
        let start = Instant::now();
        let mut pacer = FramePacer::new(period);
        for _ in 0..3 {
            pacer.wait();
        }
        assert!(start.elapsed() >= period * 3);
        assert!(pacer.fps() > 0. && pacer.fps() <= 50. + 1e-9);
    }

    #[test]
    fn test_zero_period_does_not_sleep() {
        let mut pacer = FramePacer::new(Duration::ZERO);
        let start = Instant::now();
        pacer.wait();
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
