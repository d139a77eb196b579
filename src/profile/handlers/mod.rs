// src/profile/handlers/mod.rs

pub mod education;
pub mod experience;
pub mod github;
pub mod profile;
