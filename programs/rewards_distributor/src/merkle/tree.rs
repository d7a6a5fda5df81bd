use anchor_lang::prelude::*;
use std::collections::BTreeMap;
use crate::error::*;
use crate::merkle::{hash_leaf, hash_pair, verify_claim_proof};

/// One `(index, account, amount)` entry of an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimLeaf {
    pub index: u64,
    pub account: Pubkey,
    pub amount: u64,
}

impl ClaimLeaf {
    pub fn new(index: u64, account: Pubkey, amount: u64) -> Self {
        Self { index, account, amount }
    }

    pub fn hash(&self) -> [u8; 32] {
        hash_leaf(self.index, &self.account, self.amount)
    }
}

/**
 * Off-chain merkle tree over the claim leaves of one epoch
 *
 * Levels are stored bottom-up. Each level pairs its nodes left to right;
 * an unpaired trailing node is carried to the next level unchanged, it is
 * never hashed with itself.
 */
#[derive(Debug, Clone)]
pub struct MerkleTree {
    leaves: Vec<ClaimLeaf>,
    levels: Vec<Vec<[u8; 32]>>,
    /// Leaf index -> position in the bottom level
    positions: BTreeMap<u64, usize>,
}

impl MerkleTree {
    /// Builds a tree where every entry's index is its position.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Pubkey, u64)>,
    {
        let leaves = entries
            .into_iter()
            .enumerate()
            .map(|(position, (account, amount))| ClaimLeaf::new(position as u64, account, amount))
            .collect();
        Self::new(leaves)
    }

    /// Builds a tree from leaves carrying explicit indices.
    pub fn new(leaves: Vec<ClaimLeaf>) -> Result<Self> {
        require!(!leaves.is_empty(), RewardsDistributorError::EmptyMerkleTree);

        let mut positions = BTreeMap::new();
        for (position, leaf) in leaves.iter().enumerate() {
            if positions.insert(leaf.index, position).is_some() {
                return err!(RewardsDistributorError::DuplicateLeafIndex);
            }
        }

        let mut levels = vec![leaves.iter().map(ClaimLeaf::hash).collect::<Vec<_>>()];
        loop {
            let level = &levels[levels.len() - 1];
            if level.len() <= 1 {
                break;
            }
            let next: Vec<[u8; 32]> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    _ => pair[0],
                })
                .collect();
            levels.push(next);
        }

        Ok(Self {
            leaves,
            levels,
            positions,
        })
    }

    pub fn root(&self) -> [u8; 32] {
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaves(&self) -> &[ClaimLeaf] {
        &self.leaves
    }

    /// Number of levels above the leaves.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaf(&self, index: u64) -> Option<&ClaimLeaf> {
        self.positions.get(&index).map(|&position| &self.leaves[position])
    }

    /// Sibling hashes from the leaf with `index` up to the root.
    /// Returns `None` if no leaf carries `index`.
    pub fn get_proof(&self, index: u64) -> Option<Vec<[u8; 32]>> {
        let mut position = *self.positions.get(&index)?;
        let mut proof = Vec::with_capacity(self.depth());

        for level in &self.levels[..self.depth()] {
            if let Some(sibling) = level.get(position ^ 1) {
                proof.push(*sibling);
            }
            position /= 2;
        }

        Some(proof)
    }

    pub fn verify_proof(
        index: u64,
        account: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
        root: [u8; 32],
    ) -> bool {
        verify_claim_proof(index, account, amount, proof, root)
    }
}
