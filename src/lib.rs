pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use cs::dynamic::{
    deletion_plan, min_deletions, min_deletions_str, normalized_delete_distance,
    try_min_deletions, DeletionPlan, LcsTable,
};
pub use error::{Error, Result};
