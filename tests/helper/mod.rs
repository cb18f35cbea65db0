//! Shared test utilities

#![allow(dead_code)]

pub mod feeds;
pub mod fetcher;

pub use feeds::feed;
pub use fetcher::StaticFetcher;
