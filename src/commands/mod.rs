//! Command implementations
//!
//! Commands are `impl Repository` blocks, so each one works against whatever
//! version-control and content collaborators the repository was built with.

pub mod porcelain;
