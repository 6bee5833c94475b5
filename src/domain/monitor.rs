// SPDX-License-Identifier: MPL-2.0
//! Randomized display state driven by the periodic timer.
//!
//! Each tick draws a value in `[0, 1)`. Below the fault probability a second
//! draw picks a catalog entry uniformly; otherwise the display returns to
//! ready. The previous state is never consulted, so the same fault may be
//! picked several ticks in a row.

use super::fault::{Catalog, FaultRecord};
use rand::{Rng, RngCore};

// =============================================================================
// Random Source
// =============================================================================

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Used to force specific transitions.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    draws: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Returns `None` if `draws` is empty.
    #[must_use]
    pub fn new(draws: impl Into<Vec<f64>>) -> Option<Self> {
        let draws = draws.into();
        (!draws.is_empty()).then_some(Self { draws, position: 0 })
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw
    }
}

// =============================================================================
// Transition Policy
// =============================================================================

/// Fault probability bounds.
pub mod probability_bounds {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;
    pub const DEFAULT: f64 = 0.7;
}

/// Probability that a tick lands on a fault, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPolicy {
    fault_probability: f64,
}

impl TransitionPolicy {
    #[must_use]
    pub fn new(fault_probability: f64) -> Self {
        let fault_probability = if fault_probability.is_nan() {
            probability_bounds::DEFAULT
        } else {
            fault_probability.clamp(probability_bounds::MIN, probability_bounds::MAX)
        };
        Self { fault_probability }
    }

    #[must_use]
    pub fn fault_probability(self) -> f64 {
        self.fault_probability
    }
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self {
            fault_probability: probability_bounds::DEFAULT,
        }
    }
}

// =============================================================================
// Display State
// =============================================================================

/// The single simulated condition currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DisplayState {
    /// All systems ready.
    #[default]
    Ready,
    /// Showing the catalog entry at `index`.
    Fault { index: usize },
}

impl DisplayState {
    #[must_use]
    pub fn is_fault(self) -> bool {
        matches!(self, DisplayState::Fault { .. })
    }
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: DisplayState,
    pub to: DisplayState,
}

impl Transition {
    /// Returns true if the visible state differs from before the tick.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

// =============================================================================
// Monitor
// =============================================================================

/// Owns the catalog and the current display state.
#[derive(Debug, Clone)]
pub struct Monitor {
    catalog: Catalog,
    policy: TransitionPolicy,
    state: DisplayState,
    ticks: u64,
    running: bool,
}

impl Monitor {
    /// Creates a running monitor in the ready state.
    #[must_use]
    pub fn new(catalog: Catalog, policy: TransitionPolicy) -> Self {
        debug_assert!(!catalog.is_empty(), "monitor requires a non-empty catalog");
        Self {
            catalog,
            policy,
            state: DisplayState::Ready,
            ticks: 0,
            running: true,
        }
    }

    /// Advances the simulation by one timer period.
    pub fn tick(&mut self, rng: &mut impl RandomSource) -> Transition {
        let from = self.state;
        let to = if rng.next_unit() < self.policy.fault_probability() {
            DisplayState::Fault {
                index: self.pick_index(rng),
            }
        } else {
            DisplayState::Ready
        };

        self.state = to;
        self.ticks += 1;
        Transition { from, to }
    }

    fn pick_index(&self, rng: &mut impl RandomSource) -> usize {
        let len = self.catalog.len();
        let scaled = (rng.next_unit() * len as f64).floor();
        // Guards against draws at or above 1.0 from scripted sources.
        (scaled.max(0.0) as usize).min(len - 1)
    }

    #[must_use]
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// The record shown in the fault state, if any.
    #[must_use]
    pub fn current_fault(&self) -> Option<&FaultRecord> {
        match self.state {
            DisplayState::Ready => None,
            DisplayState::Fault { index } => self.catalog.get(index),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the monitor for good; the timer is not resubscribed afterwards.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new(Catalog::builtin(), TransitionPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fault::FaultRecord;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn single_entry_catalog() -> Catalog {
        Catalog::new(vec![FaultRecord::new(
            "120",
            "Upgrade Failure",
            "https://example.com/kb/120",
        )])
        .expect("valid catalog")
    }

    #[test]
    fn starts_ready_and_running() {
        let monitor = Monitor::default();
        assert_eq!(monitor.state(), DisplayState::Ready);
        assert!(monitor.current_fault().is_none());
        assert!(monitor.is_running());
        assert_eq!(monitor.ticks(), 0);
    }

    #[test]
    fn forced_draws_walk_ready_fault_ready() {
        let mut monitor = Monitor::default();
        // 0.9 -> ready, 0.1 -> fault with index draw 0.0, 0.95 -> ready
        let mut rng = SequenceSource::new([0.9, 0.1, 0.0, 0.95]).expect("draws");

        let observed: Vec<_> = (0..3).map(|_| monitor.tick(&mut rng).to).collect();

        assert_eq!(
            observed,
            vec![
                DisplayState::Ready,
                DisplayState::Fault { index: 0 },
                DisplayState::Ready
            ]
        );
        assert_eq!(monitor.ticks(), 3);
    }

    #[test]
    fn fault_state_exposes_catalog_record() {
        let mut monitor = Monitor::new(single_entry_catalog(), TransitionPolicy::default());
        let transition = monitor.tick(&mut SequenceSource::new([0.1, 0.5]).expect("draws"));

        assert!(transition.changed());
        let record = monitor.current_fault().expect("fault selected");
        assert_eq!(record.code, "120");
        assert_eq!(record.message, "Upgrade Failure");
    }

    #[test]
    fn same_fault_may_repeat() {
        let mut monitor = Monitor::default();
        let mut rng = SequenceSource::new([0.2, 0.5]).expect("draws");

        let first = monitor.tick(&mut rng);
        let second = monitor.tick(&mut rng);

        assert_eq!(first.to, DisplayState::Fault { index: 1 });
        assert_eq!(second.to, first.to);
        assert!(!second.changed());
    }

    #[test]
    fn boundary_draw_goes_to_ready() {
        let mut monitor = Monitor::default();
        let transition = monitor.tick(&mut SequenceSource::new([0.7]).expect("draws"));
        assert_eq!(transition.to, DisplayState::Ready);
    }

    #[test]
    fn out_of_range_index_draw_is_clamped() {
        let mut monitor = Monitor::default();
        monitor.tick(&mut SequenceSource::new([0.0, 1.0]).expect("draws"));
        assert_eq!(monitor.state(), DisplayState::Fault { index: 2 });
    }

    #[test]
    fn policy_is_clamped() {
        assert_eq!(TransitionPolicy::new(1.5).fault_probability(), 1.0);
        assert_eq!(TransitionPolicy::new(-0.2).fault_probability(), 0.0);
        assert_eq!(
            TransitionPolicy::new(f64::NAN).fault_probability(),
            probability_bounds::DEFAULT
        );
    }

    #[test]
    fn zero_probability_never_faults() {
        let mut monitor = Monitor::new(Catalog::builtin(), TransitionPolicy::new(0.0));
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert!(!monitor.tick(&mut rng).to.is_fault());
        }
    }

    #[test]
    fn rng_draws_stay_in_unit_interval() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..10_000 {
            let draw = rng.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn seeded_ticks_match_fault_rate_and_uniform_selection() {
        const TICKS: usize = 10_000;
        let mut monitor = Monitor::default();
        let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
        let mut per_index = vec![0usize; monitor.catalog().len()];
        let mut faults = 0usize;

        for _ in 0..TICKS {
            if let DisplayState::Fault { index } = monitor.tick(&mut rng).to {
                faults += 1;
                per_index[index] += 1;
            }
        }

        let fault_rate = faults as f64 / TICKS as f64;
        assert!(
            (fault_rate - 0.7).abs() < 0.02,
            "fault rate {fault_rate} too far from 0.7"
        );

        let expected = 1.0 / per_index.len() as f64;
        for (index, count) in per_index.iter().enumerate() {
            let share = *count as f64 / faults as f64;
            assert!(
                (share - expected).abs() < 0.03,
                "index {index} share {share} too far from {expected}"
            );
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(SequenceSource::new(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn sequence_wraps_around() {
        let mut draws = SequenceSource::new([0.25, 0.5]).expect("draws");
        let replayed: Vec<f64> = (0..5).map(|_| draws.next_unit()).collect();
        assert_eq!(replayed, vec![0.25, 0.5, 0.25, 0.5, 0.25]);
    }

    #[test]
    fn stop_clears_running_flag() {
        let mut monitor = Monitor::default();
        monitor.stop();
        assert!(!monitor.is_running());
    }
}
