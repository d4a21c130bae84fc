//! TOPSIS Ranker - Multi-criteria decision ranking
//!
//! This crate scores alternatives against weighted benefit and cost criteria
//! with TOPSIS and serves the scorer over HTTP for CSV uploads.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
