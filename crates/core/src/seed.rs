//! Deterministic seed mixing for room and per-concern RNG streams.

use std::fmt::{self, Display, Write};

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;
const PART_SEPARATOR: char = '|';

/// One component of a mixed seed. Numbers hash as their decimal text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedPart<'a> {
    Int(i64),
    Text(&'a str),
}

impl Display for SeedPart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for SeedPart<'_> {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i32> for SeedPart<'_> {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for SeedPart<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl<'a> From<&'a str> for SeedPart<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// FNV-1a over UTF-16 code units, so labels hash the same as the string keys used by
/// the host.
struct Fnv1a(u32);

impl Fnv1a {
    fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Write for Fnv1a {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for unit in s.encode_utf16() {
            self.0 ^= u32::from(unit);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
        Ok(())
    }
}

pub fn hash32(text: &str) -> u32 {
    let mut hasher = Fnv1a::new();
    // Writing into the hasher cannot fail.
    let _ = hasher.write_str(text);
    hasher.0
}

/// Hashes `parts` joined by `|`. Pure; equal inputs always give equal seeds.
pub fn mix_seed(parts: &[SeedPart<'_>]) -> u32 {
    let mut hasher = Fnv1a::new();
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            let _ = hasher.write_char(PART_SEPARATOR);
        }
        let _ = write!(hasher, "{part}");
    }
    hasher.0
}

/// Variadic form of [`mix_seed`]: `mix_seed!(run_seed, coord.x, coord.y)`.
#[macro_export]
macro_rules! mix_seed {
    ($($part:expr),+ $(,)?) => {
        $crate::seed::mix_seed(&[$($crate::seed::SeedPart::from($part)),+])
    };
}

pub fn derive_room_seed(run_seed: u32, x: i32, y: i32) -> u32 {
    mix_seed(&[run_seed.into(), x.into(), y.into()])
}

pub fn derive_stream_seed(room_seed: u32, purpose: &str) -> u32 {
    mix_seed(&[room_seed.into(), purpose.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash32_matches_fnv1a_reference_values() {
        assert_eq!(hash32(""), 2_166_136_261);
        assert_eq!(hash32("a"), 3_826_002_220);
    }

    #[test]
    fn mix_seed_is_stable() {
        assert_eq!(mix_seed!(1, 2, 3), mix_seed!(1, 2, 3));
        assert_eq!(mix_seed!("a", "b"), mix_seed!("a", "b"));
        assert_eq!(mix_seed!("a", "b"), 692_878_806);
        assert_eq!(mix_seed!(1, 2, 3), 1_820_130_519);
    }

    #[test]
    fn mix_seed_separates_different_inputs() {
        assert_ne!(mix_seed!(1, 2, 3), mix_seed!(1, 2, 4));
        assert_eq!(mix_seed!(1, 2, 4), 1_769_797_662);
        assert_ne!(mix_seed!(12, 3), mix_seed!(1, 23));
    }

    #[test]
    fn room_seed_formats_negative_coordinates_as_decimal_text() {
        assert_eq!(derive_room_seed(12_345, 2, -1), 284_713_396);
        let spelled_out = mix_seed(&[12_345_u32.into(), "2".into(), "-1".into()]);
        assert_eq!(derive_room_seed(12_345, 2, -1), spelled_out);
    }

    #[test]
    fn stream_seeds_differ_by_purpose() {
        let room = derive_room_seed(77, 0, 0);
        let labels = ["theme", "layout", "event", "enemies", "loot", "hazards", "decor", "portal"];
        let mut seeds: Vec<u32> =
            labels.iter().map(|label| derive_stream_seed(room, label)).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), labels.len());
    }
}
