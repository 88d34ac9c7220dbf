// src/core/mod.rs

pub mod compiler;
pub mod config;
