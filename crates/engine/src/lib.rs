//! Core engine for a volleyball lineup board: serve rotation over a
//! zone-indexed arena, role marker resolution, overlap fault checking and
//! the rotation keys that saved serve-receive placements are filed under.
//!
//! The engine is pure state and rules. Rendering, input handling and
//! persistence live with the embedder; see `volley-store` for the saved
//! formation records.

pub mod court;
pub mod display;
pub mod faults;
pub mod keys;
pub mod lineup;
pub mod models;
pub mod rotation;
