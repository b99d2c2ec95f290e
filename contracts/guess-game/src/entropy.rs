//! Secret number generation.
//!
//! The generator is only as uniform as the entropy behind it: one raw draw is
//! reduced modulo the interval width with no further whitening. The host PRNG
//! is fine for a game but is not unpredictable to validators.

use soroban_sdk::Env;

use crate::{INTERVALS, RANGE_CEILING};

/// One raw pseudo-random value per call.
pub trait EntropySource {
    fn draw(&mut self) -> u64;
}

/// Entropy drawn from the host PRNG of the current invocation.
pub struct HostEntropy<'a> {
    env: &'a Env,
}

impl<'a> HostEntropy<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl EntropySource for HostEntropy<'_> {
    fn draw(&mut self) -> u64 {
        self.env.prng().gen::<u64>()
    }
}

/// Raw draws are treated as signed and folded onto their magnitude.
fn magnitude(raw: u64) -> u64 {
    (raw as i64).unsigned_abs()
}

/// Lower bound of a fresh interval, in `[0, RANGE_CEILING - INTERVALS)`.
pub fn interval_start<E: EntropySource>(entropy: &mut E) -> u32 {
    (magnitude(entropy.draw()) % u64::from(RANGE_CEILING - INTERVALS)) as u32
}

/// Secret in `[start, start + INTERVALS)`. `start + INTERVALS` must fit in a `u32`.
pub fn generate<E: EntropySource>(start: u32, entropy: &mut E) -> u32 {
    start + (magnitude(entropy.draw()) % u64::from(INTERVALS)) as u32
}
