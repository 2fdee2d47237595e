use rand::SeedableRng;
use rand_pcg::Pcg64;

/// RNG used for dealing and for tie-breaks between equally scored moves.
pub type GameRng = Pcg64;

/// Deterministic RNG factory for a given (seed, game_id) pair.
///
/// Derives the stream seed as `seed ^ game_id.rotate_left(32)` and feeds it to PCG64, so
/// equal inputs reproduce the same deal and the same tie-breaks.
#[must_use]
#[inline]
pub fn rng_for_game(seed: u64, game_id: u64) -> GameRng {
    let derived: u64 = seed ^ game_id.rotate_left(32);
    Pcg64::seed_from_u64(derived)
}

/// Single-stream shorthand for `rng_for_game(seed, 0)`.
#[must_use]
#[inline]
pub fn seeded(seed: u64) -> GameRng {
    rng_for_game(seed, 0)
}
