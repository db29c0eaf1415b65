//! Concrete forage worlds.

pub mod layouts;
pub mod maze;
