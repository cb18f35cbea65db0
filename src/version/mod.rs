//! Version resolution layer
//!
//! This module provides the core functionality for resolving the latest
//! version a feed publishes, following the feed's chain of lookup pages.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │◀────│  Resolver   │────▶│  Selector   │
//! │   (pages)   │     │  (levels)   │     │ (max pick)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        ▼                   ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Fetchers   │     │  Template   │     │    Loose    │
//! │   (http)    │     │ (${names})  │     │ (ordering)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`loose`]: Version strings with a numeric-segment-aware ordering
//! - [`selector`]: Picks the latest version among extracted candidates
//! - [`template`]: Placeholder table for `${name}` substitution
//! - [`fetcher`]: Fetcher trait for retrieving feed pages
//! - [`fetchers`]: Concrete fetcher implementations (HTTP)
//! - [`resolver`]: Walks a feed's levels down to the final version
//! - [`error`]: Error types for fetching, selection and resolution

pub mod error;
pub mod fetcher;
pub mod fetchers;
pub mod loose;
pub mod resolver;
pub mod selector;
pub mod template;
