pub mod delete_distance;
pub mod longest_common_subsequence;

// Re-export dynamic programming algorithms with descriptive names
pub use delete_distance::{
    deletion_plan, min_deletions, min_deletions_str, normalized_delete_distance,
    try_min_deletions, DeletionPlan,
};
pub use longest_common_subsequence::{lcs_length, lcs_length_of, lcs_of, lcs_sequence, LcsTable};
