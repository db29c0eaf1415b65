//! Forage Harness: concrete worlds and auditable planning runs.
//!
//! The harness supplies the grid engine the search core treats as a black
//! box (a maze parsed from ASCII layouts), replays plans through it, and
//! packages each planning run as a digested artifact bundle.
//!
//! The harness does NOT implement search logic; it delegates to
//! `forage_search`. Worlds provide grid mechanics only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bundle;
pub mod replay;
pub mod runner;
pub mod worlds;
