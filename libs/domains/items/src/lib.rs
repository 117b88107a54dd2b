//! Items Domain
//!
//! Create/read/update/delete over a single in-memory item collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, 422 on malformed input
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← One repository call per operation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Id assignment and records (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, StoredItem
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! let service = ItemService::new(InMemoryItemRepository::new());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ITEM_NOT_FOUND, ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{DeleteResponse, Item, ItemId, StoredItem};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
