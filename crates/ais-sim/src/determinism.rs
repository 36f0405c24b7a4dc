//! Named substream seed derivations for reproducible runs.

use ais_core::derive_substream_seed;

/// Derives the deterministic seed used for one forward path.
pub fn path_seed(master_seed: u64, path_index: usize) -> u64 {
    derive_substream_seed(master_seed, path_index as u64)
}

/// Derives the master seed for the reverse-direction ensemble, keeping its
/// streams disjoint from the forward paths.
pub fn reverse_master_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed ^ 0x5C5C_5C5C_5C5C_5C5C, u64::MAX)
}
