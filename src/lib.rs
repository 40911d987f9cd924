//! Mansion Horror - Stealth Simulation Core

pub mod core;
pub mod mansion;
pub mod monster;
pub mod player;
pub mod simulation;
pub mod tasks;
