//! Random source for the sampling drop gate.

use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Produces one draw per entry, uniform in `0..100`.
pub trait Sampler: Send + Sync {
    fn draw_percent(&self) -> u32;
}

/// Draws from the calling thread's generator, so concurrent formatters never
/// contend on a shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl Sampler for RandomSampler {
    fn draw_percent(&self) -> u32 {
        rand::rng().random_range(0..100)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[derive(Debug)]
pub struct ScriptedSampler {
    draws: Vec<u32>,
    next: AtomicUsize,
}

impl ScriptedSampler {
    /// Values are clamped into `0..100`. An empty list behaves like `[99]`,
    /// which keeps every entry at any `drop-percent` below 100.
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        let mut draws: Vec<u32> = draws.into();
        if draws.is_empty() {
            draws.push(99);
        }
        for draw in &mut draws {
            *draw = (*draw).min(99);
        }
        Self {
            draws,
            next: AtomicUsize::new(0),
        }
    }
}

impl Sampler for ScriptedSampler {
    fn draw_percent(&self) -> u32 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.draws[i % self.draws.len()]
    }
}
