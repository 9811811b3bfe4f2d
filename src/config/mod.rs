//! Configuration module for pocket-ledger
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
