//! Claim merkle tree.
//!
//! Hashing and verification are shared by the program and off-chain
//! clients. The tree builder is only compiled off-chain.

pub mod proof;
#[cfg(not(target_os = "solana"))]
pub mod tree;

pub use proof::*;
#[cfg(not(target_os = "solana"))]
pub use tree::*;
