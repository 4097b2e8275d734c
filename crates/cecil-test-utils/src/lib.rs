//! Shared test utilities for the cecil-attributes workspace.
//!
//! This crate provides a temporary project fixture so settings tests don't
//! each hand-roll directory setup. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`project`] — [`TestProject`](project::TestProject) temporary project root

pub mod project;
