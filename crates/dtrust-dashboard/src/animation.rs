//! Entrance animations for panel rows.
//!
//! Rows enter with CSS keyframe animations whose delay grows with the row
//! index. Looping decorations (pulse rings, status dots) are plain CSS
//! animations owned by their element and stop when it unmounts.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether entrance and looping animations run at all.
static ANIMATIONS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Returns whether animations are enabled.
pub fn animations_enabled() -> bool {
    ANIMATIONS_ENABLED.load(Ordering::Relaxed)
}

/// Enables or disables animations for the whole dashboard.
pub fn set_animations_enabled(enabled: bool) {
    ANIMATIONS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Class placed on the root element; `motion-off` freezes every animation
/// at its final frame.
pub fn root_motion_class() -> &'static str {
    if animations_enabled() {
        "motion-on"
    } else {
        "motion-off"
    }
}

/// Keyframe set used for an element's entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// Fade in while sliding right from -20px
    SlideRight,
    /// Fade in while sliding up from +20px
    SlideUp,
    /// Fade in while sliding up from +10px
    Rise,
    /// Fade in while scaling from 0
    Pop,
    /// Fade in while sliding down from -10px
    Drop,
    /// Grow width from 0 to the element's set width
    Grow,
}

impl Entrance {
    pub fn css_class(&self) -> &'static str {
        match self {
            Entrance::SlideRight => "enter-slide-right",
            Entrance::SlideUp => "enter-slide-up",
            Entrance::Rise => "enter-rise",
            Entrance::Pop => "enter-pop",
            Entrance::Drop => "enter-drop",
            Entrance::Grow => "enter-grow",
        }
    }

    fn default_duration_ms(&self) -> u32 {
        match self {
            Entrance::Pop => 300,
            Entrance::Grow => 500,
            _ => 400,
        }
    }
}

/// Class and inline style for one animated element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motion {
    pub class: &'static str,
    pub style: String,
}

impl Motion {
    pub fn new(entrance: Entrance, delay_ms: u32) -> Self {
        Self::with_duration(entrance, delay_ms, entrance.default_duration_ms())
    }

    pub fn with_duration(entrance: Entrance, delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            class: entrance.css_class(),
            style: format!(
                "animation-delay: {}ms; animation-duration: {}ms;",
                delay_ms, duration_ms
            ),
        }
    }
}

/// Per-index delay schedule for a list of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u32,
    pub base_ms: u32,
}

impl Stagger {
    pub const fn new(step_ms: u32) -> Self {
        Self {
            step_ms,
            base_ms: 0,
        }
    }

    /// Same step, every delay shifted by `extra_ms`.
    pub const fn offset(self, extra_ms: u32) -> Self {
        Self {
            step_ms: self.step_ms,
            base_ms: self.base_ms + extra_ms,
        }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_ms
            .saturating_add(self.step_ms.saturating_mul(index))
    }

    /// Motion for the row at `index`.
    pub fn motion(&self, entrance: Entrance, index: usize) -> Motion {
        Motion::new(entrance, self.delay_ms(index))
    }
}

pub const STATS_STAGGER: Stagger = Stagger::new(50);
pub const ORACLE_STAGGER: Stagger = Stagger::new(50);
pub const CONSENSUS_STAGGER: Stagger = Stagger::new(100);
pub const TRIGGER_STAGGER: Stagger = Stagger::new(80);
pub const ACCOUNTABILITY_STAGGER: Stagger = Stagger::new(80);
pub const MAP_STAGGER: Stagger = Stagger::new(100);

/// Bars start filling this long after their row has started entering.
pub const BAR_DELAY_MS: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_strictly_increase() {
        for stagger in [
            STATS_STAGGER,
            ORACLE_STAGGER,
            CONSENSUS_STAGGER,
            TRIGGER_STAGGER,
            ACCOUNTABILITY_STAGGER,
            MAP_STAGGER,
        ] {
            let delays: Vec<u32> = (0..10).map(|i| stagger.delay_ms(i)).collect();
            assert!(delays.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(delays[0], 0);
        }
    }

    #[test]
    fn test_offset_stagger() {
        let bars = ORACLE_STAGGER.offset(BAR_DELAY_MS);
        assert_eq!(bars.delay_ms(0), 300);
        assert_eq!(bars.delay_ms(2), 400);
    }

    #[test]
    fn test_motion_style() {
        let motion = TRIGGER_STAGGER.motion(Entrance::SlideRight, 3);
        assert_eq!(motion.class, "enter-slide-right");
        assert_eq!(
            motion.style,
            "animation-delay: 240ms; animation-duration: 400ms;"
        );
    }

    #[test]
    fn test_delay_saturates() {
        assert_eq!(Stagger::new(u32::MAX).delay_ms(2), u32::MAX);
    }

    #[test]
    fn test_toggle_animations() {
        set_animations_enabled(false);
        assert_eq!(root_motion_class(), "motion-off");
        set_animations_enabled(true);
        assert_eq!(root_motion_class(), "motion-on");
    }
}
