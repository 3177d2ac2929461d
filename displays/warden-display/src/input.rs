//! Button input
//!
//! Panels report button levels; the navigator wants release edges.

use warden_core::nav::ButtonEdges;

/// Pressed state of the four buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub cancel: bool,
    pub confirm: bool,
    pub prev: bool,
    pub next: bool,
}

/// Source of button levels (GPIO, touch, remote display)
pub trait InputSource {
    /// Sample the current button levels
    fn read_levels(&mut self) -> ButtonLevels;
}

/// Turns successive level samples into release edges
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonTracker {
    previous: ButtonLevels,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edges for buttons that were pressed last sample and are released now
    pub fn update(&mut self, levels: ButtonLevels) -> ButtonEdges {
        let prev = self.previous;
        self.previous = levels;
        ButtonEdges {
            cancel: prev.cancel && !levels.cancel,
            confirm: prev.confirm && !levels.confirm,
            prev: prev.prev && !levels.prev,
            next: prev.next && !levels.next,
        }
    }

    /// Sample `source` and return the release edges
    pub fn poll<I: InputSource + ?Sized>(&mut self, source: &mut I) -> ButtonEdges {
        let levels = source.read_levels();
        self.update(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Script {
        samples: [ButtonLevels; 3],
        index: usize,
    }

    impl InputSource for Script {
        fn read_levels(&mut self) -> ButtonLevels {
            let levels = self.samples[self.index % 3];
            self.index += 1;
            levels
        }
    }

    #[test]
    fn test_edge_on_release_only() {
        let held = ButtonLevels {
            next: true,
            ..Default::default()
        };
        let mut source = Script {
            samples: [held, held, ButtonLevels::default()],
            index: 0,
        };
        let mut tracker = ButtonTracker::new();
        assert!(!tracker.poll(&mut source).any());
        assert!(!tracker.poll(&mut source).any());
        let edges = tracker.poll(&mut source);
        assert!(edges.next);
        assert!(!edges.cancel);
    }

    #[test]
    fn test_simultaneous_release() {
        let mut tracker = ButtonTracker::new();
        tracker.update(ButtonLevels {
            cancel: true,
            prev: true,
            ..Default::default()
        });
        let edges = tracker.update(ButtonLevels::default());
        assert!(edges.cancel && edges.prev);
        assert!(!tracker.update(ButtonLevels::default()).any());
    }
}
