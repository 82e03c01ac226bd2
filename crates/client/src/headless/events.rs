use clinic_core::{PlayerSnapshot, ScheduledEventManager};
use tracing::info;

/// Fires one announcement per level threshold crossed.
#[derive(Clone, Debug)]
pub struct Milestones {
    thresholds: Vec<(u32, &'static str)>,
    fired: usize,
}

impl Milestones {
    pub fn new(thresholds: Vec<(u32, &'static str)>) -> Self {
        Self {
            thresholds,
            fired: 0,
        }
    }

    /// Number of milestones announced so far.
    pub fn fired(&self) -> usize {
        self.fired
    }
}

impl Default for Milestones {
    fn default() -> Self {
        Self::new(vec![
            (6, "the pharmacist starts recognising you"),
            (12, "a rival clinic opens across the street"),
            (20, "the board schedules an inspection"),
            (30, "the clinic is in the papers"),
        ])
    }
}

impl ScheduledEventManager for Milestones {
    fn notify(&mut self, player: &PlayerSnapshot) {
        while let Some(&(level, event)) = self.thresholds.get(self.fired) {
            if player.level < level {
                break;
            }
            info!(level = player.level, threshold = level, "event: {}", event);
            self.fired += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_level(level: u32) -> PlayerSnapshot {
        PlayerSnapshot {
            level,
            ..PlayerSnapshot::default()
        }
    }

    #[test]
    fn each_threshold_fires_once() {
        let mut events = Milestones::new(vec![(2, "a"), (4, "b"), (6, "c")]);
        events.notify(&at_level(1));
        assert_eq!(events.fired(), 0);
        events.notify(&at_level(4));
        assert_eq!(events.fired(), 2);
        events.notify(&at_level(4));
        assert_eq!(events.fired(), 2);
        events.notify(&at_level(100));
        assert_eq!(events.fired(), 3);
    }
}
