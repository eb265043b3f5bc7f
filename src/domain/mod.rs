//! Domain models for flatdeploy
//!
//! This module contains pure domain objects handed to the deployer.
//! These types are free of external dependencies.

pub mod dependency;

pub use dependency::{Dependency, DirKind};
