use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use crate::constants::{LEAF_PREFIX, NODE_PREFIX};

/// Hashes a claim leaf.
///
/// Layout: `LEAF_PREFIX || index (u64 LE) || account (32 bytes) || amount (u64 LE)`.
/// The prefix keeps a leaf from ever being mistaken for an internal node.
pub fn hash_leaf(index: u64, account: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[
        LEAF_PREFIX,
        &index.to_le_bytes(),
        account.as_ref(),
        &amount.to_le_bytes(),
    ])
    .to_bytes()
}

/// Hashes two sibling nodes in byte order, so proofs carry no direction bits.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let hash = if a <= b {
        hashv(&[NODE_PREFIX, a, b])
    } else {
        hashv(&[NODE_PREFIX, b, a])
    };
    hash.to_bytes()
}

/// Folds `proof` onto `leaf` and compares the result with `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}

/// Verifies that `(index, account, amount)` is a leaf of the tree with `root`.
pub fn verify_claim_proof(
    index: u64,
    account: &Pubkey,
    amount: u64,
    proof: &[[u8; 32]],
    root: [u8; 32],
) -> bool {
    verify(proof, root, hash_leaf(index, account, amount))
}
