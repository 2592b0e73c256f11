//! Shared helpers.

pub mod git;
pub mod hash;
pub mod path;
pub mod plural;
