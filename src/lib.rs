//! Dino Park - turn-based dinosaur ecosystem simulation

pub mod actions;
pub mod core;
pub mod entity;
pub mod simulation;
pub mod world;
