//! # Twitch API client
//!
//! An async client for the Twitch web API covering both the Helix surface
//! and the legacy v5 (Kraken) surface.
//!
//! Collection endpoints come in two shapes: flat lists returned in one
//! response, and cursor-paginated collections walked page by page via an
//! opaque continuation token. The [`pagination`] module unifies the two —
//! paginated endpoint methods return a [`pagination::Cursor`] that fetches
//! one page per call, or everything at once with `fetch_all`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use twitch_client::{Credentials, HelixClient, StreamsRequest};
//!
//! #[tokio::main]
//! async fn main() -> twitch_client::Result<()> {
//!     let credentials = Credentials::new("<client id>").with_token("<oauth token>");
//!     let client = HelixClient::new(credentials);
//!
//!     let mut cursor = client.get_streams(StreamsRequest::default())?;
//!     let first_page = cursor.next_page().await?;
//!     for stream in first_page {
//!         println!("{:?} ({:?} viewers)", stream.title, stream.viewer_count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Credentials are always injected explicitly; nothing in this crate reads
//! configuration files or the environment.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)] // TODO: document the remaining resource fields before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Credentials and token acquisition
pub mod auth;

/// Error types for the crate
pub mod error;

/// Helix API surface
pub mod helix;

/// HTTP transport
pub mod http;

/// Cursor pagination and single-page fetching
pub mod pagination;

/// Immutable query descriptions
pub mod query;

/// Typed resource records
pub mod resources;

/// Shared constants (base URLs, valid parameter sets)
pub mod types;

/// v5 (Kraken) API surface
pub mod v5;

mod validate;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credentials;
pub use error::{Error, Result};
pub use helix::{ClipsRequest, HelixClient, StreamsRequest, VideosRequest};
pub use pagination::{Cursor, CursorState};
pub use v5::TwitchClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
