//! Repository components and external collaborators
//!
//! - `git`: version-control operations (stage, dated commit, push)
//! - `provider`: sources of text fragments for placeholder files
//! - `repository`: ties the collaborators to one working tree
//! - `workspace`: the per-year output directories on disk

pub mod git;
pub mod provider;
pub mod repository;
pub mod workspace;

#[cfg(test)]
pub(crate) mod fakes;
