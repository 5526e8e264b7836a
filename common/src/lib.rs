//! Shared primitives for PRISM.
//!
//! Everything here is dependency-light and used by every other crate:
//!
//! - **models**: Pure data structures (requests, results, UI enums)
//! - **client-core**: Request client, shell state machine, config, locale
//! - **prism**: Terminal front end wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
