//! D-TRUST disaster truth dashboard
//!
//! This crate provides a Dioxus desktop application that renders the
//! disaster map, oracle network, consensus, trigger and accountability
//! panels from an injected dataset.

pub mod animation;
pub mod components;
pub mod data;
pub mod error;
pub mod metrics;
pub mod style;
pub mod theme;

pub use error::DataError;
