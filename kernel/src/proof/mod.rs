//! Proof module: domain-separated hashing and canonical serialization.
//!
//! Depends on nothing else in the kernel. Everything that is hashed or
//! written as an artifact goes through here.

pub mod canon;
pub mod hash;
pub mod hash_domain;
