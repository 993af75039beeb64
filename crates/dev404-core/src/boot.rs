//! Scripted boot-sequence simulator.
//!
//! Plays a fixed script of terminal lines one at a time with a randomized
//! per-line delay, then reports completion exactly once after a settle pause.
//! The state machine never touches a clock itself: callers ask
//! [`BootSequence::next_delay`] how long to wait, then call
//! [`BootSequence::tick`] when the deadline passes. Tests drive ticks
//! directly and only the line *timing* is nondeterministic — the revealed
//! sequence and count are fully checkable.

use std::time::Duration;

use rand::Rng;

/// The boot script, revealed line by line. The trailing empty line is part of
/// the script and counts toward the cursor like any other line.
pub const BOOT_SCRIPT: &[&str] = &[
    "DEV 404 System Boot Sequence v2.1.4",
    "Initializing sonic architecture...",
    "Loading full-stack protocols...",
    "Mounting audio drivers...",
    "Connecting to music servers...",
    "Establishing beat synchronization...",
    "Loading creative matrices...",
    "Scanning for inspiration...",
    "Calibrating frequency modulators...",
    "Activating developer mode...",
    "System ready. Welcome to DEV 404.",
    "",
];

/// Base delay before each line is revealed.
pub const LINE_DELAY_BASE: Duration = Duration::from_millis(300);

/// Upper bound (exclusive) of the per-line jitter in milliseconds.
pub const LINE_DELAY_JITTER_MS: u64 = 200;

/// Pause between the last revealed line and the completion signal.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Where the boot sequence currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Created, nothing revealed yet.
    Idle,
    /// Some lines revealed, more to go.
    Revealing,
    /// Every line revealed, waiting out the settle delay.
    AllRevealed,
    /// Terminal state. The completion step has been reported.
    Completed,
}

/// What a single [`BootSequence::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    /// The next script line was revealed.
    Line(&'static str),
    /// The settle delay elapsed. Reported exactly once per boot.
    Completed,
}

/// Tick-driven reveal of [`BOOT_SCRIPT`].
#[derive(Debug)]
pub struct BootSequence {
    script: &'static [&'static str],
    revealed: Vec<&'static str>,
    next_index: usize,
    phase: BootPhase,
}

impl BootSequence {
    /// Boot sequence over the standard script.
    pub fn new() -> Self {
        Self::with_script(BOOT_SCRIPT)
    }

    /// Boot sequence over a custom script. An empty script skips straight to
    /// the settle phase.
    pub fn with_script(script: &'static [&'static str]) -> Self {
        let phase = if script.is_empty() {
            BootPhase::AllRevealed
        } else {
            BootPhase::Idle
        };
        Self {
            script,
            revealed: Vec::with_capacity(script.len()),
            next_index: 0,
            phase,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Lines revealed so far, in script order.
    pub fn revealed(&self) -> &[&'static str] {
        &self.revealed
    }

    /// Total number of lines in the script.
    pub fn script_len(&self) -> usize {
        self.script.len()
    }

    /// True while the reveal cursor has not passed the last line. The UI
    /// shows the blinking prompt cursor only in this window.
    pub fn is_revealing(&self) -> bool {
        self.next_index < self.script.len()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BootPhase::Completed
    }

    /// How long to wait before the next [`tick`](Self::tick): base plus
    /// bounded jitter per line, the fixed settle delay after the last line,
    /// `None` once completed (nothing left to schedule).
    pub fn next_delay(&self, rng: &mut impl Rng) -> Option<Duration> {
        match self.phase {
            BootPhase::Idle | BootPhase::Revealing => {
                let jitter = rng.random_range(0..LINE_DELAY_JITTER_MS);
                Some(LINE_DELAY_BASE + Duration::from_millis(jitter))
            }
            BootPhase::AllRevealed => Some(SETTLE_DELAY),
            BootPhase::Completed => None,
        }
    }

    /// Advance one step: reveal the next line, or report completion once all
    /// lines are out and the settle delay was waited. Returns `None` forever
    /// after completion — there is no transition out of
    /// [`BootPhase::Completed`].
    pub fn tick(&mut self) -> Option<BootStep> {
        match self.phase {
            BootPhase::Idle | BootPhase::Revealing => {
                let line = self.script[self.next_index];
                self.revealed.push(line);
                self.next_index += 1;
                self.phase = if self.next_index == self.script.len() {
                    BootPhase::AllRevealed
                } else {
                    BootPhase::Revealing
                };
                Some(BootStep::Line(line))
            }
            BootPhase::AllRevealed => {
                self.phase = BootPhase::Completed;
                Some(BootStep::Completed)
            }
            BootPhase::Completed => None,
        }
    }
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reveals_script_in_order() {
        let mut boot = BootSequence::new();
        for expected in BOOT_SCRIPT {
            assert_eq!(boot.tick(), Some(BootStep::Line(expected)));
        }
        assert_eq!(boot.revealed(), BOOT_SCRIPT);
    }

    #[test]
    fn test_no_completion_before_all_lines() {
        let mut boot = BootSequence::new();
        for _ in 0..BOOT_SCRIPT.len() {
            assert_ne!(boot.tick(), Some(BootStep::Completed));
        }
        assert_eq!(boot.phase(), BootPhase::AllRevealed);
        assert!(!boot.is_complete());
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut boot = BootSequence::new();
        for _ in 0..BOOT_SCRIPT.len() {
            boot.tick();
        }
        assert_eq!(boot.tick(), Some(BootStep::Completed));
        assert!(boot.is_complete());
        // No transition out of Completed.
        assert_eq!(boot.tick(), None);
        assert_eq!(boot.tick(), None);
        assert_eq!(boot.revealed().len(), BOOT_SCRIPT.len());
    }

    #[test]
    fn test_phase_progression() {
        let mut boot = BootSequence::new();
        assert_eq!(boot.phase(), BootPhase::Idle);
        boot.tick();
        assert_eq!(boot.phase(), BootPhase::Revealing);
        while boot.is_revealing() {
            boot.tick();
        }
        assert_eq!(boot.phase(), BootPhase::AllRevealed);
        boot.tick();
        assert_eq!(boot.phase(), BootPhase::Completed);
    }

    #[test]
    fn test_line_delay_within_jitter_bounds() {
        let boot = BootSequence::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let d = boot.next_delay(&mut rng).unwrap();
            assert!(d >= LINE_DELAY_BASE, "delay below base: {d:?}");
            assert!(
                d < LINE_DELAY_BASE + Duration::from_millis(LINE_DELAY_JITTER_MS),
                "delay above jitter bound: {d:?}"
            );
        }
    }

    #[test]
    fn test_settle_delay_after_last_line() {
        let mut boot = BootSequence::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..BOOT_SCRIPT.len() {
            boot.tick();
        }
        assert_eq!(boot.next_delay(&mut rng), Some(SETTLE_DELAY));
        boot.tick();
        assert_eq!(boot.next_delay(&mut rng), None);
    }

    #[test]
    fn test_empty_script_settles_immediately() {
        static EMPTY: &[&str] = &[];
        let mut boot = BootSequence::with_script(EMPTY);
        assert_eq!(boot.phase(), BootPhase::AllRevealed);
        assert_eq!(boot.tick(), Some(BootStep::Completed));
        assert_eq!(boot.tick(), None);
    }

    #[test]
    fn test_script_ends_with_blank_line() {
        assert_eq!(BOOT_SCRIPT.last(), Some(&""));
    }
}
