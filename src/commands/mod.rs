//! Command implementations for flatdeploy CLI

pub mod completions;
pub mod deploy;
pub mod patterns;
pub mod version;
