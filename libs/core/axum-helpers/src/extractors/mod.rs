//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that reduce boilerplate and route extraction failures
//! through [`AppError`](crate::errors::AppError).

pub mod validated_query;

pub use validated_query::ValidatedQuery;
