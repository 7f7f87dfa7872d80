// src/core/mod.rs

pub mod decoder;
pub mod resolver;
pub mod templates;
