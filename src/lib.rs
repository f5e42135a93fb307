//! tagshort - a tag-indexed URL shortener
//!
//! Stored URLs are addressed by short codes derived from their row ids
//! through a reversible base-70 codec. Each URL carries free-text tags.
//!
//! # Architecture
//! - `codec`: integer ⇄ code transform
//! - `storage`: SeaORM link store (dedup-on-insert, tags, listings)
//! - `api`: HTTP services
//! - `interfaces`: command-line commands
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging

pub mod api;
pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod storage;
pub mod system;
pub mod utils;
