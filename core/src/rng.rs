use core::ops::{Deref, DerefMut};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Random source owned by each engine.
///
/// Generator state is never persisted: a restored engine starts from fresh entropy.
#[derive(Clone, Debug)]
pub struct GameRng(SmallRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }

    /// Seeded when a session seed is configured, entropy otherwise.
    ///
    /// Each game mixes in its own salt so engines sharing a session seed do not
    /// replay the same stream.
    pub fn for_game(seed: Option<u64>, salt: u64) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed ^ salt),
            None => Self::from_entropy(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        log::warn!("game rng state not restored, reseeding from entropy");
        Self::from_entropy()
    }
}

impl Deref for GameRng {
    type Target = SmallRng;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for GameRng {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
