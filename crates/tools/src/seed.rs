use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use geode_core::mix_seed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u32),
    Generated(u32),
}

impl SeedChoice {
    pub fn value(self) -> u32 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }

    pub fn resolve(cli_seed: Option<u32>) -> Self {
        match cli_seed {
            Some(seed) => Self::Cli(seed),
            None => Self::Generated(generate_runtime_seed()),
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh run seed from the wall clock, pid, and a per-process counter, hashed through
/// the same mixer the generator uses for room seeds.
pub fn generate_runtime_seed() -> u32 {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |since| since.as_nanos());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    runtime_seed_from(nanos, process::id(), counter)
}

fn runtime_seed_from(nanos: u128, pid: u32, counter: u64) -> u32 {
    let secs = (nanos / 1_000_000_000) as i64;
    let subsec = (nanos % 1_000_000_000) as i64;
    mix_seed!("runtime", secs, subsec, pid, counter as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_seed_wins() {
        assert_eq!(SeedChoice::resolve(Some(4_242)), SeedChoice::Cli(4_242));
        assert_eq!(SeedChoice::resolve(Some(7)).value(), 7);
    }

    #[test]
    fn missing_seed_is_generated() {
        assert!(matches!(SeedChoice::resolve(None), SeedChoice::Generated(_)));
    }

    #[test]
    fn each_entropy_source_moves_the_seed() {
        let base = runtime_seed_from(1_700_000_000_123_456_789, 4_242, 0);
        assert_eq!(base, runtime_seed_from(1_700_000_000_123_456_789, 4_242, 0));
        assert_ne!(base, runtime_seed_from(1_700_000_000_123_456_790, 4_242, 0));
        assert_ne!(base, runtime_seed_from(1_700_000_000_123_456_789, 4_243, 0));
        assert_ne!(base, runtime_seed_from(1_700_000_000_123_456_789, 4_242, 1));
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
