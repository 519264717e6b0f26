//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256 digests)
//! - Password hashing (Argon2id)
//! - Signed token issuance and verification (JWT, HS256)

pub mod crypto;
pub mod password;
pub mod token;
