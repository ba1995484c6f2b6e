use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Holds every frame for at least `frame_time` and tracks the achieved rate.
pub struct FramePacer {
    frame_time: Duration,
    frame_start: Instant,
    /// Exponential moving average of real frame durations.
    average: Duration,
}

impl FramePacer {
    /// `frame_time` comes from [`Settings::frame_time`](crate::Settings::frame_time)
    /// and is never zero.
    pub fn new(frame_time: Duration) -> Self {
        Self {
            frame_time,
            frame_start: Instant::now(),
            average: frame_time,
        }
    }

    /// Frames per second averaged over recent frames; the target rate until
    /// the first frame ends.
    pub fn fps(&self) -> f64 {
        1. / self.average.as_secs_f64()
    }

    /// Ends the current frame, sleeping off whatever is left of its budget.
    pub fn end_frame(&mut self) {
        if let Some(rest) = self.frame_time.checked_sub(self.frame_start.elapsed()) {
            sleep(rest);
        }
        let now = Instant::now();
        let actual = now.duration_since(self.frame_start);
        self.average = self.average.mul_f64(0.9) + actual.mul_f64(0.1);
        self.frame_start = now;
    }
}
