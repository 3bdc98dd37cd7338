//! Shared component definitions for the starblitz core.
//!
//! Plain data carried by actors and exchanged with collaborators; all
//! behavior lives in `blitz_sim`.

pub mod components;
pub mod parse;
