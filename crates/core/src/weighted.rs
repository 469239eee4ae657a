//! Cumulative-weight draws shared by every weighted table.

use crate::rng::RngStream;

/// Draws `r` in `[0, total)` and walks `candidates` subtracting each weight until
/// `r <= 0`.
///
/// A non-positive total returns the first candidate without consuming a draw; rounding
/// that leaves `r` above zero after the walk returns the last candidate. `None` only for
/// an empty slice.
pub fn weighted_pick<'a, T, F>(
    rng: &mut RngStream,
    candidates: &'a [T],
    weight_of: F,
) -> Option<&'a T>
where
    F: Fn(&T) -> f64,
{
    let first = candidates.first()?;
    let total = candidates.iter().fold(0.0, |sum, candidate| sum + weight_of(candidate));
    if total <= 0.0 {
        return Some(first);
    }

    let mut roll = rng.float(0.0, total);
    for candidate in candidates {
        roll -= weight_of(candidate);
        if roll <= 0.0 {
            return Some(candidate);
        }
    }
    candidates.last()
}
