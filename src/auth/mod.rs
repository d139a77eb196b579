//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - User registration and login
//! - JWT token issuance and verification (TokenService)
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod tokens;
pub mod validators;


pub use extractors::AuthedUser;
pub use models::User;
pub use routes::auth_routes;
pub use tokens::TokenService;
