//! Frame timing for the render loop.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frames kept in the rolling average
const WINDOW: usize = 120;

/// Rolling frame-time statistics measured against a frame budget.
pub struct FrameMetrics {
    frame_times: VecDeque<Duration>,
    frame_start: Instant,
    budget: Duration,
    /// Frames that took longer than the budget since the last `take_report`
    pub overruns: u32,
    /// Frames rendered since the last `take_report`
    pub frames: u32,
}

impl FrameMetrics {
    pub fn new(budget: Duration) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(WINDOW),
            frame_start: Instant::now(),
            budget,
            overruns: 0,
            frames: 0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn end_frame(&mut self) {
        self.record(self.frame_start.elapsed());
    }

    /// Record a measured frame duration.
    pub fn record(&mut self, elapsed: Duration) {
        if self.frame_times.len() == WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(elapsed);
        self.frames += 1;
        if elapsed > self.budget {
            self.overruns += 1;
        }
    }

    /// Average frame time in milliseconds over the rolling window.
    pub fn avg_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let sum: Duration = self.frame_times.iter().sum();
        sum.as_secs_f32() * 1000.0 / self.frame_times.len() as f32
    }

    /// Frames per second the render work alone could sustain.
    pub fn fps(&self) -> f32 {
        let ms = self.avg_frame_time_ms();
        if ms > 0.0 {
            1000.0 / ms
        } else {
            0.0
        }
    }

    /// Log a summary and reset the per-report counters.
    pub fn take_report(&mut self) {
        tracing::debug!(
            frames = self.frames,
            overruns = self.overruns,
            avg_ms = self.avg_frame_time_ms(),
            fps = self.fps(),
            "Frame stats"
        );
        if self.overruns > 0 {
            tracing::warn!(
                "{} of {} frames exceeded the {:.1}ms budget",
                self.overruns,
                self.frames,
                self.budget.as_secs_f32() * 1000.0
            );
        }
        self.frames = 0;
        self.overruns = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_and_fps() {
        let mut metrics = FrameMetrics::new(Duration::from_millis(16));
        for _ in 0..4 {
            metrics.record(Duration::from_millis(10));
        }
        assert!((metrics.avg_frame_time_ms() - 10.0).abs() < 0.01);
        assert!((metrics.fps() - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_overruns_counted_and_reset() {
        let mut metrics = FrameMetrics::new(Duration::from_millis(16));
        metrics.record(Duration::from_millis(5));
        metrics.record(Duration::from_millis(30));
        assert_eq!(metrics.frames, 2);
        assert_eq!(metrics.overruns, 1);

        metrics.take_report();
        assert_eq!(metrics.frames, 0);
        assert_eq!(metrics.overruns, 0);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut metrics = FrameMetrics::new(Duration::from_millis(16));
        for _ in 0..WINDOW {
            metrics.record(Duration::from_millis(40));
        }
        for _ in 0..WINDOW {
            metrics.record(Duration::from_millis(2));
        }
        assert!((metrics.avg_frame_time_ms() - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_metrics() {
        let metrics = FrameMetrics::new(Duration::from_millis(16));
        assert_eq!(metrics.avg_frame_time_ms(), 0.0);
        assert_eq!(metrics.fps(), 0.0);
    }
}
