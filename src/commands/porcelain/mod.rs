//! User-facing commands
//!
//! - `generate`: backfill a date range with scheduled, backdated commits
//! - `initialize`: commit the whole working tree at a chosen date

pub mod generate;
pub mod initialize;
