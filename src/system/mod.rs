// src/system/mod.rs

pub mod server;
pub mod site;
