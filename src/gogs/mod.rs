//! Gogs side (read/write)
pub mod client;
pub mod config;
pub mod org;
pub mod repo;
