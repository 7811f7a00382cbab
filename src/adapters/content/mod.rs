//! Content retrieval adapters. Implement ContentPort per source kind.

pub mod mock;
pub mod web;
pub mod youtube;

pub use mock::MockContentAdapter;
pub use web::{FetchOptions, WebPageRetriever};
pub use youtube::YoutubeRetriever;
