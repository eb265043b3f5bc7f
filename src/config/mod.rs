//! Configuration file handling for flatdeploy
//!
//! This module contains data structures for:
//! - the deployment manifest (YAML) listing resolved dependencies
//! - dependency and component entries within it

pub mod dependency;
pub mod manifest;

pub use manifest::DeployManifest;
