//! Resolve the latest version of out-of-tree kernel patch sets
//!
//! - [`feed`]: Feed descriptions, their lookup levels and the built-in catalog
//! - [`version`]: Fetching, version ordering and layered resolution
//! - [`report`]: Runs the resolver over a catalog
//! - [`config`]: Configuration file and data paths

pub mod config;
pub mod feed;
pub mod report;
pub mod version;
