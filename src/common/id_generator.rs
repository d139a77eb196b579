// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., U_K7NP3X for users)
//!
//! The alphabet excludes I, L, O, U, so IDs are unambiguous and
//! case-insensitive, with 32^6 combinations per entity type.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User (U_)
    User,
    /// Profile (P_)
    Profile,
    /// Experience (X_)
    Experience,
    /// Education (E_)
    Education,
}

impl EntityPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Profile => "P",
            EntityPrefix::Experience => "X",
            EntityPrefix::Education => "E",
        }
    }
}

fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID in the form "PREFIX_XXXXXX" (e.g., "X_8MWQT2")
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

/// Generate a Profile ID (P_XXXXXX)
pub fn generate_profile_id() -> String {
    generate_id(EntityPrefix::Profile)
}

/// Generate an Experience ID (X_XXXXXX)
pub fn generate_experience_id() -> String {
    generate_id(EntityPrefix::Experience)
}

/// Generate an Education ID (E_XXXXXX)
pub fn generate_education_id() -> String {
    generate_id(EntityPrefix::Education)
}
