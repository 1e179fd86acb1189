//! Adventure Sherpa - Guided Outing Recommendation Wizard
//!
//! This crate implements a multi-step preference wizard that normalizes
//! a user's answers into scoring criteria and fetches ranked outing
//! recommendations from the portal backend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
