// src/engine/mod.rs
pub mod clone;
pub mod config;
pub mod error;
pub mod name;
pub mod scaffold;
