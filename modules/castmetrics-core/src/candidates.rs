//! The fixed candidate pool: known-active accounts used as the universe for
//! trending, leaderboard and recommendation selection. Process-wide constant,
//! never mutated; order only matters as a stable base for slicing.

const CANDIDATE_POOL: [u64; 30] = [
    3, 602, 1689, 99, 5650, 829, 2433, 4823, 239, 6546, //
    5, 680, 457, 13242, 7086, 7499, 1048, 1214, 2, 2532, //
    382, 8152, 6131, 3621, 20, 1956, 15, 616, 6833, 194,
];

/// Subset fetched for the trending list.
pub fn trending_slice() -> &'static [u64] {
    &CANDIDATE_POOL[..15]
}

/// Subset fetched for the leaderboard.
pub fn leaderboard_slice() -> &'static [u64] {
    &CANDIDATE_POOL[..20]
}

/// The whole pool, used for recommendation candidate selection.
pub fn full_pool() -> &'static [u64] {
    &CANDIDATE_POOL
}
