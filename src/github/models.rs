// src/github/models.rs
// =============================================================================
// The slices of GitHub's JSON records that we actually read.
//
// serde ignores every field we don't declare, so a commit record is reduced
// to its author's login and a repository record to its name.
// =============================================================================

use serde::Deserialize;

// One entry of "list repositories for an organization"
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
}

// One entry of "list commits"
//
// `author` is the GitHub account linked to the commit, which is null for
// bots, unlinked emails and the like.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommitRecord {
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub login: Option<String>,
}

impl CommitRecord {
    /// The author's login, if the commit is attributed to a GitHub account.
    pub fn author_login(&self) -> Option<&str> {
        self.author.as_ref()?.login.as_deref()
    }
}
