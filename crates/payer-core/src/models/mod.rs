//! Data models for extraction results and configuration.

pub mod candidate;
pub mod config;
