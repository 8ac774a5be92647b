//! Presentational components for the LinkER buyer console.

pub mod components;

pub use components::*;
