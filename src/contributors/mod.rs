// src/contributors/mod.rs
// =============================================================================
// This module turns commit listings into per-year contributor sets.
//
// Submodules:
// - set: ContributorSet and the year -> set map
// - aggregate: the repository × year loop that fills the map
// =============================================================================

mod aggregate;
mod set;

pub use aggregate::collect_contributors;
pub use set::{ContributorSet, YearContributors};
