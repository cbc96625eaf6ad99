//! # Domain Models
//!
//! Pure configuration and registry types shared by every crate (`serde` only).
//! Keep it lean: no I/O, networking, or heavy logic.

pub mod config;
pub mod constants;
pub mod registry;
