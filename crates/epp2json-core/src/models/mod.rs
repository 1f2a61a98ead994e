//! Data models for parsed EPP exports and pipeline configuration.

pub mod config;
pub mod invoice;
pub mod timestamp;
