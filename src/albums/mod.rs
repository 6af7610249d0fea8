//! Albums module - fetches an artist's top albums from Last.fm.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - [`Album`] and [`AlbumsStoreError`]
//! - **API DTOs** (`dto.rs`) - Exact Last.fm response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Endpoint** (`endpoint.rs`) - Builds Last.fm request URLs
//! - **Network** (`network.rs`) - Transport trait plus the reqwest client
//! - **Store** (`store.rs`) - Ties the above together behind [`AlbumsStore`]
//!
//! # Usage
//!
//! ```ignore
//! use albums::{AlbumsApiStore, AlbumsStore, AlbumsStoreConfig, HttpNetworkClient};
//!
//! let network = Arc::new(HttpNetworkClient::new(None)?);
//! let store = AlbumsApiStore::new(network, AlbumsStoreConfig { api_key, ..Default::default() });
//!
//! store.fetch_albums("bd13909f-1c29-4c27-a874-d4aaf27c5b1a", Box::new(|result| {
//!     println!("{:?}", result);
//! })).await;
//! ```

pub mod adapter;
pub mod domain;
pub mod dto;
pub mod endpoint;
pub mod network;
pub mod store;

pub use domain::{Album, AlbumsStoreError};
pub use endpoint::LastFmEndpoint;
pub use network::{HttpNetworkClient, HttpResponse, JsonRequest, NetworkClient, NetworkError};
pub use store::{AlbumsApiStore, AlbumsCompletion, AlbumsStore, AlbumsStoreConfig, TOP_ALBUMS_LIMIT};
