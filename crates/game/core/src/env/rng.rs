//! RNG oracle for deterministic random number generation.
//!
//! This module provides a trait-based RNG system that ensures deterministic
//! random number generation for damage rolls, random actor selection and
//! enemy offers.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. Combined with the
//! per-action nonce this makes a seeded encounter replay exactly.

use std::collections::VecDeque;
use std::sync::Mutex;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive). A zero-sided die is treated
    /// as one-sided, so a roll is never below 1.
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }

    /// Pick an index in `0..len`. Returns 0 for an empty range.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. It is stateless: the caller supplies the state as the seed.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Replays a fixed script of die results, then rolls 1 forever.
///
/// Each scripted value is the face a `roll_die` call will show, so
/// `ScriptedRng::rolls([5, 3])` makes the next two rolls come up 5 and 3
/// (as long as the die has that many sides). Useful for tests and demos.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    script: Mutex<VecDeque<u32>>,
}

impl ScriptedRng {
    pub fn rolls(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: Mutex::new(rolls.into_iter().map(|r| r.saturating_sub(1)).collect()),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|script| script.len()).unwrap_or(0)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or(0)
    }
}

/// Distinguishes independent rolls made by the same action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RollContext {
    PlayerDamage = 0,
    EnemyDamage = 1,
    ActorSelection = 2,
    EnemyOffer = 3,
}

/// Compute deterministic seed from battle state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at session start (for replay/determinism)
/// * `nonce` - Action sequence number (increments each action)
/// * `actor` - Index of the acting combatant, or a slot reserved for the enemy
/// * `context` - Which roll within the action this is
pub fn compute_seed(game_seed: u64, nonce: u64, actor: u32, context: RollContext) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u32 as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
