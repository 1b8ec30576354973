//! Catalog API interaction module
//!
//! This module provides the client side of the adventure catalog REST
//! collection: wire types, a thin HTTP layer, and the typed client used
//! by the rest of the application.
//!
//! # Module Structure
//!
//! - [`model`] - Wire types for catalog records
//! - [`http`] - HTTP utilities for the REST calls
//! - [`client`] - Typed client for the collection endpoint
//!
//! # Example
//!
//! ```ignore
//! use crate::api::client::CatalogClient;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = CatalogClient::new("http://localhost:3000/aventuras")?;
//!     let adventures = client.fetch_all().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
pub mod model;
