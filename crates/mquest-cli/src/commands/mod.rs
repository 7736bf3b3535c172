pub mod batch;
pub mod generate;
pub mod init;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A seeded generator when `seed` is given, otherwise one seeded from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
