// src/services/mod.rs
//
// Shared services module containing integrations used across domain modules

pub mod github;

pub use github::GithubService;
