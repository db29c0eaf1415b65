//! Forage Kernel: value types and canonical hashing shared by the planner.
//!
//! # API Surface
//!
//! - [`grid`] -- `Position`, `Direction` and `FoodGrid`, the vocabulary a
//!   forage world speaks to the search engine
//! - [`proof`] -- domain-separated SHA-256 content hashes and the single
//!   canonical JSON serializer
//!
//! # Module Dependency Direction
//!
//! `grid` ← `proof`
//!
//! One-way only. `grid` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
