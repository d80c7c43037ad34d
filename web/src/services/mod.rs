pub mod api;
pub mod auth;
pub mod email;
pub mod favorites;
pub mod google;
pub mod market;
