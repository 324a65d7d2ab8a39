//! Core types and trait definitions for the campaigns service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The storage backends and the HTTP layer both depend on it.

pub mod campaign;
pub mod store;

pub use campaign::Campaign;
pub use store::CampaignStore;
