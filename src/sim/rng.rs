//! Randomness used by the simulation
//!
//! Only ball respawns are random. The source is a trait so a run can be
//! seeded (`Pcg32`) or scripted value by value.

use std::collections::VecDeque;
use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::direction_from_angle;

/// A stream of uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of samples, then repeats the last one
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: VecDeque<f32>,
    last: f32,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 0.0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if let Some(v) = self.values.pop_front() {
            self.last = v;
        }
        self.last
    }
}

/// Draw a respawn direction: angle uniform in [π/6, 5π/6], horizontal sign 50/50.
///
/// Consumes two samples, angle first.
pub fn launch_direction(rng: &mut impl RandomSource) -> Vec2 {
    let angle = PI * (1.0 / 6.0 + 2.0 / 3.0 * rng.next_unit());
    let sign = if rng.next_unit() > 0.5 { 1.0 } else { -1.0 };
    let dir = direction_from_angle(angle);
    Vec2::new(dir.x * sign, dir.y)
}
