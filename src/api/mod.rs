//! HTTP access to the remote transaction store

pub mod client;
pub mod error;
pub mod filters;

pub use client::TransactionClient;
pub use error::ApiError;
pub use filters::TransactionFilters;
