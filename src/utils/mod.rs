//! Utility functions

pub mod common;
