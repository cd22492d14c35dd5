//! Workforce Overview Engine
//!
//! This crate computes the logic behind an HR overview dashboard: headline
//! workforce metrics, department breakdowns and ranked employee lists derived
//! from a static employee collection, today's attendance snapshot, monthly
//! trend summaries, and an eased numeric reveal of the headline values.

#![warn(missing_docs)]

pub mod actions;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod overview;
pub mod reveal;
