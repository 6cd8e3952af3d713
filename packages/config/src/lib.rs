// ABOUTME: Configuration constants shared by every Course Manager package
// ABOUTME: Keeps environment variable names and defaults in one place

pub mod constants;

pub use constants::*;
