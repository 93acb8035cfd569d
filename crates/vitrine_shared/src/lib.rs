//! # Vitrine Shared
//!
//! Math primitives shared between the UI core and renderer backends.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - GPU crates
//! - Window-system crates
//!
//! Renderer backends consume these types; they do not define them.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod math;

pub use math::Vec2;
