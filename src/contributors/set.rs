// src/contributors/set.rs
// =============================================================================
// Storage for the contributors we discover.
//
// ContributorSet remembers each login once and hands them back in the order
// they were first seen. YearContributors maps each year to its set; a
// BTreeMap keeps the years sorted.
//
// Rust concepts:
// - Type aliases: `YearContributors` is just a shorter name for the map
// - impl Iterator return types: callers iterate without seeing the Vec
// =============================================================================

use std::collections::{BTreeMap, HashSet};

pub type YearContributors = BTreeMap<i32, ContributorSet>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorSet {
    // First-seen order, for output
    logins: Vec<String>,
    // Membership, for dedup
    seen: HashSet<String>,
}

impl ContributorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `login` if it is new. Returns whether it was added.
    ///
    /// Logins are compared exactly: "Octocat" and "octocat" are two people.
    pub fn insert(&mut self, login: &str) -> bool {
        // Already known: inserting again is a no-op
        if self.contains(login) {
            return false;
        }

        // Two owned copies, one for lookups and one for ordering
        self.seen.insert(login.to_string());
        self.logins.push(login.to_string());
        true
    }

    pub fn contains(&self, login: &str) -> bool {
        self.seen.contains(login)
    }

    pub fn len(&self) -> usize {
        self.logins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        // Borrow each String as &str so callers can't mutate the set
        self.logins.iter().map(String::as_str)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not just a HashSet?
//    - A HashSet has no stable order, and the output files list logins in
//      the order they were first seen
//    - The Vec gives the order, the HashSet gives O(1) "seen it?" checks
//
// 2. Why does insert take &str instead of String?
//    - Most calls are duplicates, and for those we never need to allocate
//    - We only call .to_string() once we know the login is new
// -----------------------------------------------------------------------------
