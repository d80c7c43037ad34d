//! # Shared library for the beRich web client
//!
//! Defines the contract between the frontend and the backend API, plus the
//! pure domain logic the dashboard relies on. All DTOs use JSON
//! serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: login, Google exchange and registration DTOs
//!   - **[`dto::market`]**: history payloads, range codes and favorites
//!   - **[`dto::email`]**: diagnostic email-sender DTO
//! - **[`outcome`]**: unified classification of backend responses
//! - **[`history`]**: provider payload to displayed chart series
//! - **[`favorites`]**: favorites-list helpers (dedup invariant)
//! - **[`validation`]**: advisory pre-submit form validation
//! - **[`catalog`]**: the CAC40 ticker catalog
//! - **[`messages`]**: user-facing message strings and failure mapping
//!
//! ## Wire format
//!
//! The backend contract predates this client and uses camelCase (and a few
//! French) field names, so DTOs carry explicit `serde` renames rather than
//! the default snake_case mapping.

pub mod catalog;
pub mod dto;
pub mod favorites;
pub mod history;
pub mod messages;
pub mod outcome;
pub mod validation;

pub use dto::*;
pub use outcome::ApiError;
