//! # Data Transfer Objects
//!
//! All structures exchanged with the backend REST API.
//!
//! - [`auth`] - login, Google token exchange, registration
//! - [`market`] - history time series, range codes, favorites
//! - [`email`] - diagnostic email-sender request
//!
//! Field naming follows the backend's wire contract (camelCase, with the
//! email endpoint keeping its original French field names), mapped through
//! explicit `#[serde(rename…)]` attributes.

pub mod auth;
pub mod email;
pub mod market;

pub use auth::*;
pub use email::*;
pub use market::*;
