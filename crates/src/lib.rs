//! tagsel - multi-select tag picker
//!
//! Library crate exposing the picker widget (a host-agnostic state machine plus
//! its rendering contract) and the pieces the terminal binary is built from.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod candidate;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod selection;

pub mod ui;

pub use candidate::Candidate;
pub use error::{ConfigError, LoadError, TagselError};
