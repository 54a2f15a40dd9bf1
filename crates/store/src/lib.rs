//! Saved data for the lineup board: formation snapshots and serve-receive
//! placements, an in-memory catalogue with the listing semantics the pickers
//! expect, and the JSON interchange used for backup files.

pub mod error;
pub mod interchange;
pub mod memory;
pub mod records;
