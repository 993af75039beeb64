//! Fake-reactive audio visualizer frames.
//!
//! There is no audio analysis anywhere in this crate. Each frame is a fresh
//! draw of 32 synthetic bar magnitudes: a wide, hot range while the
//! (simulated) playback flag is on, a narrow ambient-noise floor while it is
//! off. Frames are ephemeral — the renderer synthesizes one per draw pass and
//! throws it away; the only loop state is the event loop's own handle.

use rand::Rng;

/// Number of bars per frame.
pub const BAR_COUNT: usize = 32;

/// Magnitude that maps to a full-height bar before scaling.
pub const FULL_SCALE: f64 = 100.0;

/// Bars never exceed this fraction of the panel height.
pub const HEIGHT_SCALE: f64 = 0.8;

/// Bars above this magnitude get the glow treatment, but only while playing.
pub const GLOW_THRESHOLD: f64 = 60.0;

/// Idle magnitudes are drawn from `[IDLE_FLOOR, IDLE_CEIL)`.
pub const IDLE_FLOOR: f64 = 5.0;
pub const IDLE_CEIL: f64 = 15.0;

/// Playing magnitudes are drawn from `[ACTIVE_FLOOR, ACTIVE_CEIL)`.
pub const ACTIVE_FLOOR: f64 = 20.0;
pub const ACTIVE_CEIL: f64 = 120.0;

/// One synthesized frame of bar magnitudes.
#[derive(Debug, Clone, Copy)]
pub struct VisualizerFrame {
    bars: [f64; BAR_COUNT],
    playing: bool,
}

impl VisualizerFrame {
    /// Draw a fresh frame. `playing` selects the magnitude range.
    pub fn synthesize(rng: &mut impl Rng, playing: bool) -> Self {
        let mut bars = [0.0; BAR_COUNT];
        for bar in &mut bars {
            *bar = if playing {
                rng.random_range(ACTIVE_FLOOR..ACTIVE_CEIL)
            } else {
                rng.random_range(IDLE_FLOOR..IDLE_CEIL)
            };
        }
        Self { bars, playing }
    }

    /// A flat, silent frame for before the first draw.
    pub fn silent() -> Self {
        Self {
            bars: [IDLE_FLOOR; BAR_COUNT],
            playing: false,
        }
    }

    pub fn bars(&self) -> &[f64; BAR_COUNT] {
        &self.bars
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Fraction of the panel height a magnitude fills, in `[0, 1]`.
    /// Playing-range magnitudes can exceed [`FULL_SCALE`]; they clamp to 1.
    pub fn height_fraction(value: f64) -> f64 {
        ((value / FULL_SCALE) * HEIGHT_SCALE).clamp(0.0, 1.0)
    }

    /// Whether the bar at `index` gets the glow emphasis this frame.
    pub fn glows(&self, index: usize) -> bool {
        self.playing && self.bars[index] > GLOW_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_idle_magnitudes_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let frame = VisualizerFrame::synthesize(&mut rng, false);
            for &v in frame.bars() {
                assert!((IDLE_FLOOR..IDLE_CEIL).contains(&v), "idle bar out of range: {v}");
            }
        }
    }

    #[test]
    fn test_playing_magnitudes_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let frame = VisualizerFrame::synthesize(&mut rng, true);
            for &v in frame.bars() {
                assert!(
                    (ACTIVE_FLOOR..ACTIVE_CEIL).contains(&v),
                    "playing bar out of range: {v}"
                );
            }
        }
    }

    #[test]
    fn test_frame_has_fixed_bar_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let frame = VisualizerFrame::synthesize(&mut rng, true);
        assert_eq!(frame.bars().len(), BAR_COUNT);
    }

    #[test]
    fn test_no_glow_while_idle() {
        let mut rng = StdRng::seed_from_u64(4);
        let frame = VisualizerFrame::synthesize(&mut rng, false);
        for i in 0..BAR_COUNT {
            assert!(!frame.glows(i), "idle frames never glow");
        }
    }

    #[test]
    fn test_glow_requires_threshold() {
        let mut rng = StdRng::seed_from_u64(5);
        let frame = VisualizerFrame::synthesize(&mut rng, true);
        for (i, &v) in frame.bars().iter().enumerate() {
            assert_eq!(frame.glows(i), v > GLOW_THRESHOLD);
        }
    }

    #[test]
    fn test_height_fraction_clamps() {
        assert_eq!(VisualizerFrame::height_fraction(0.0), 0.0);
        assert_eq!(VisualizerFrame::height_fraction(200.0), 1.0);
        let half = VisualizerFrame::height_fraction(50.0);
        assert!((half - 0.4).abs() < 1e-12, "50 of 100 at 0.8 scale, got {half}");
    }

    #[test]
    fn test_silent_frame_is_flat_and_idle() {
        let frame = VisualizerFrame::silent();
        assert!(!frame.is_playing());
        assert!(frame.bars().iter().all(|&v| v == IDLE_FLOOR));
    }
}
