//! Items Domain
//!
//! CRUD over a collection of strings, each stored under a generated key,
//! plus head/tail sampling in insertion order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Input validation, error translation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage contract (trait + in-memory engine)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! let repository = InMemoryItemRepository::with_values(["String1", "String2"]);
//! let service = ItemService::new(repository);
//!
//! // Routes: /items, /items/count, /items/{id}, /head, /tail
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult, StorageError, StorageResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{CreatedItem, Item, ItemCount, ItemEntry, ItemValue, SampleQuery};
pub use repository::ItemRepository;
pub use service::ItemService;
