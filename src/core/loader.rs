//! Loading screen timeline
//!
//! The intro loader runs a fixed-length progress animation once and then hands
//! control to the page. The timeline itself is plain data so it can be driven
//! by `requestAnimationFrame` in the browser and by hand in tests.

/// Default length of the progress animation
pub const DEFAULT_DURATION_MS: f64 = 2400.0;

/// Default length of the fade-out after progress reaches 100 %
pub const DEFAULT_EXIT_MS: f64 = 500.0;

/// Captions shown while loading, each with the progress at which it starts
const STAGES: &[(f64, &str)] = &[
    (0.0, "Warming up"),
    (0.3, "Sketching ideas"),
    (0.6, "Polishing pixels"),
    (0.9, "Almost there"),
];

/// Phase of the loader as seen by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Running,
    Exiting,
    Done,
}

/// Ease-out cubic: fast start, soft landing
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fixed-duration progress timeline with a one-shot completion signal
#[derive(Debug, Clone)]
pub struct LoaderTimeline {
    duration_ms: f64,
    exit_ms: f64,
    started_at: Option<f64>,
    progress: f64,
    completed: bool,
}

impl Default for LoaderTimeline {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, DEFAULT_EXIT_MS)
    }
}

impl LoaderTimeline {
    pub fn new(duration_ms: f64, exit_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            exit_ms: exit_ms.max(0.0),
            started_at: None,
            progress: 0.0,
            completed: false,
        }
    }

    /// Eased progress in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress as a whole percentage for the counter
    pub fn percent(&self) -> u32 {
        (self.progress * 100.0).round() as u32
    }

    pub fn caption(&self) -> &'static str {
        STAGES
            .iter()
            .rev()
            .find(|(from, _)| self.progress >= *from)
            .map(|(_, caption)| *caption)
            .unwrap_or(STAGES[0].1)
    }

    pub fn phase(&self) -> LoaderPhase {
        if self.completed {
            LoaderPhase::Done
        } else if self.progress >= 1.0 {
            LoaderPhase::Exiting
        } else {
            LoaderPhase::Running
        }
    }

    /// Total time from the first tick until completion fires
    pub fn total_ms(&self) -> f64 {
        self.duration_ms + self.exit_ms
    }

    /// Advance to timestamp `now_ms`.
    ///
    /// The first call anchors the timeline. Returns `true` exactly once: on the
    /// tick where the exit fade has finished. Later ticks are no-ops.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.completed {
            return false;
        }

        let start = *self.started_at.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(0.0);

        let linear = if self.duration_ms == 0.0 {
            1.0
        } else {
            elapsed / self.duration_ms
        };
        // Clock skew must never move the bar backwards
        self.progress = self.progress.max(ease_out_cubic(linear));

        if elapsed >= self.total_ms() {
            self.progress = 1.0;
            self.completed = true;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut timeline = LoaderTimeline::new(1000.0, 200.0);
        let mut fired = 0;

        let mut now = 10_000.0;
        while now < 10_000.0 + 5000.0 {
            if timeline.tick(now) {
                fired += 1;
            }
            now += 16.0;
        }

        assert_eq!(fired, 1);
        assert_eq!(timeline.phase(), LoaderPhase::Done);
        assert_eq!(timeline.percent(), 100);
    }

    #[test]
    fn test_completion_with_single_late_tick() {
        let mut timeline = LoaderTimeline::new(1000.0, 200.0);
        assert!(!timeline.tick(0.0));
        assert!(timeline.tick(60_000.0));
        assert!(!timeline.tick(60_016.0));
    }

    #[test]
    fn test_progress_is_monotone() {
        let mut timeline = LoaderTimeline::default();
        timeline.tick(0.0);
        timeline.tick(1200.0);
        let mid = timeline.progress();

        // A timestamp from the past must not rewind the bar
        timeline.tick(300.0);
        assert_eq!(timeline.progress(), mid);

        timeline.tick(1800.0);
        assert!(timeline.progress() > mid);
    }

    #[test]
    fn test_phases() {
        let mut timeline = LoaderTimeline::new(100.0, 100.0);
        timeline.tick(0.0);
        assert_eq!(timeline.phase(), LoaderPhase::Running);

        timeline.tick(150.0);
        assert_eq!(timeline.phase(), LoaderPhase::Exiting);
        assert_eq!(timeline.percent(), 100);

        assert!(timeline.tick(200.0));
        assert_eq!(timeline.phase(), LoaderPhase::Done);
    }

    #[test]
    fn test_zero_duration_completes_after_exit() {
        let mut timeline = LoaderTimeline::new(0.0, 0.0);
        assert!(timeline.tick(5.0));
        assert_eq!(timeline.percent(), 100);
    }

    #[test]
    fn test_caption_follows_progress() {
        let mut timeline = LoaderTimeline::new(1000.0, 0.0);
        assert_eq!(timeline.caption(), "Warming up");

        timeline.tick(0.0);
        timeline.tick(999.0);
        assert_eq!(timeline.caption(), "Almost there");
    }
}
