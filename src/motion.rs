/// Entrance and scroll-linked motion timing
///
/// Everything here is a pure function of elapsed time or scroll position.
/// Widgets read a progress in 0.0..=1.0 and fade or slide accordingly.
use std::time::Duration;

use crate::config::MotionSettings;

const SECTION_DURATION: Duration = Duration::from_millis(800);
const SKILL_STAGGER: Duration = Duration::from_millis(50);
const SKILL_DURATION: Duration = Duration::from_millis(500);
const WORD_INITIAL_DELAY: Duration = Duration::from_millis(300);
const WORD_STAGGER: Duration = Duration::from_millis(120);
const WORD_DURATION: Duration = Duration::from_millis(400);

/// Scroll fraction over which the hero backdrop fades out
const BACKDROP_FADE_RANGE: f32 = 0.2;
const BACKDROP_MIN_SCALE: f32 = 0.9;

/// Cubic ease-out on a normalized time value
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Eased progress of an animation that starts after `delay` and lasts `duration`
pub fn progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    let Some(running) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }
    ease_out_cubic(running.as_secs_f32() / duration.as_secs_f32())
}

/// Hero backdrop (opacity, scale) for a relative scroll offset
pub fn backdrop(scroll: f32) -> (f32, f32) {
    let t = (scroll / BACKDROP_FADE_RANGE).clamp(0.0, 1.0);
    (1.0 - t, 1.0 - (1.0 - BACKDROP_MIN_SCALE) * t)
}

/// Timing configuration for one run of the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    enabled: bool,
    card_stagger: Duration,
    card_duration: Duration,
}

impl From<MotionSettings> for Motion {
    fn from(settings: MotionSettings) -> Self {
        Self {
            enabled: settings.enabled,
            card_stagger: settings.card_stagger(),
            card_duration: settings.card_duration(),
        }
    }
}

impl Motion {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn run(&self, elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        progress(elapsed, delay, duration)
    }

    /// Entrance delay of the card at `index`; the index affects nothing else
    pub fn card_delay(&self, index: usize) -> Duration {
        self.card_stagger * index as u32
    }

    pub fn card(&self, elapsed: Duration, index: usize) -> f32 {
        self.run(elapsed, self.card_delay(index), self.card_duration)
    }

    /// Time until a grid of `count` cards has fully entered
    pub fn cards_settle_after(&self, count: usize) -> Duration {
        self.card_delay(count.saturating_sub(1)) + self.card_duration
    }

    pub fn skill(&self, elapsed: Duration, index: usize) -> f32 {
        self.run(elapsed, SKILL_STAGGER * index as u32, SKILL_DURATION)
    }

    pub fn skills_settle_after(&self, count: usize) -> Duration {
        SKILL_STAGGER * count.saturating_sub(1) as u32 + SKILL_DURATION
    }

    pub fn section(&self, elapsed: Duration) -> f32 {
        self.run(elapsed, Duration::ZERO, SECTION_DURATION)
    }

    /// Word-by-word reveal of the hero headline
    pub fn headline_word(&self, elapsed: Duration, word: usize) -> f32 {
        self.run(elapsed, WORD_INITIAL_DELAY + WORD_STAGGER * word as u32, WORD_DURATION)
    }

    pub fn headline_settle_after(&self, words: usize) -> Duration {
        WORD_INITIAL_DELAY + WORD_STAGGER * words.saturating_sub(1) as u32 + WORD_DURATION
    }

    /// Fade-in length of a section revealed by scrolling
    pub fn section_settle_after(&self) -> Duration {
        SECTION_DURATION
    }
}
