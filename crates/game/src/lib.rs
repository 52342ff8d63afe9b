//! Top-down 2D character: keyboard input drives a rapier kinematic body and a
//! set of named animation parameters.

pub mod config;
pub mod core;
pub mod input;
pub mod player;
pub mod world;
