//! # Seed Tree
//!
//! A complete binary tree that expands one master seed into `N` party seeds, and opens all of them
//! but one with `log2(N)` seeds.
//!
//! The nodes are stored as a flat array of `2N - 1` seeds with the root at index `0`. The children
//! of node `i` are `2i + 1` and `2i + 2`, the leaves occupy `N - 1 ..= 2N - 2`.
//!
//! A parent is expanded with a single [tree hash](DOMAIN_SEPARATOR_TREE) of
//! `salt || i as u8 || node[i]`. The `2λ` byte digest is split in two, the first half is the left
//! child and the second half the right child.
//!
//! To hide the leaf `alpha` the prover sends the sibling of every node on the path from the root
//! to `alpha` ([`PartialTreeSeeds`]). The verifier rebuilds a [`PartialSeedTree`] in which the
//! path itself, and therefore leaf `alpha`, is never set.

use crate::{
    constants::{
        params::{MAX_N_MPC_LOG2, PARAM_SEED_SIZE},
        types::{Salt, Seed},
    },
    error::{Error, Result},
};

use super::prg::hashing::{hash_scoped, DOMAIN_SEPARATOR_TREE};

/// Index of the first node at `depth`
#[inline(always)]
const fn row_start(depth: usize) -> usize {
    (1 << depth) - 1
}

/// Depth of the node at `index`
#[inline(always)]
const fn depth_of(index: usize) -> usize {
    (index + 1).ilog2() as usize
}

fn check_depth(log_n: usize) -> Result<()> {
    if log_n == 0 || log_n > MAX_N_MPC_LOG2 {
        return Err(Error::InvalidParameters(
            "the seed tree depth must be between 1 and 8",
        ));
    }
    Ok(())
}

fn check_alpha(alpha: u16, log_n: usize) -> Result<()> {
    let n_parties = 1 << log_n;
    if alpha as usize >= n_parties {
        return Err(Error::InvalidHiddenParty { alpha, n_parties });
    }
    Ok(())
}

/// Derive both children of the parent at `index`
fn expand_node(salt: &Salt, index: usize, parent: &Seed) -> (Seed, Seed) {
    let digest = hash_scoped(DOMAIN_SEPARATOR_TREE, |hasher| {
        hasher.update(salt);
        hasher.update(&[index as u8]);
        hasher.update(parent);
    });

    let mut left = [0u8; PARAM_SEED_SIZE];
    let mut right = [0u8; PARAM_SEED_SIZE];
    left.copy_from_slice(&digest[..PARAM_SEED_SIZE]);
    right.copy_from_slice(&digest[PARAM_SEED_SIZE..2 * PARAM_SEED_SIZE]);
    (left, right)
}

/// Fully expanded seed tree, held by the prover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTree {
    log_n: usize,
    nodes: Vec<Seed>,
}

impl SeedTree {
    /// Allocate a tree of depth `log_n` with `master_seed` at the root. Call [`SeedTree::expand`]
    /// to populate the other nodes.
    pub fn new(master_seed: Seed, log_n: usize) -> Result<Self> {
        check_depth(log_n)?;
        let mut nodes = vec![[0u8; PARAM_SEED_SIZE]; 2 * (1 << log_n) - 1];
        nodes[0] = master_seed;
        Ok(Self { log_n, nodes })
    }

    /// Allocate and expand a tree in one step
    pub fn generate(master_seed: Seed, salt: &Salt, log_n: usize) -> Result<Self> {
        let mut tree = Self::new(master_seed, log_n)?;
        tree.expand(salt);
        Ok(tree)
    }

    /// Populate every node below the root in increasing index order
    pub fn expand(&mut self, salt: &Salt) {
        for i in 0..self.n_leaves() - 1 {
            let (left, right) = expand_node(salt, i, &self.nodes[i]);
            self.nodes[2 * i + 1] = left;
            self.nodes[2 * i + 2] = right;
        }
    }

    /// The seeds the verifier needs to rebuild every leaf except `alpha`, one per depth
    pub fn compute_partial(&self, alpha: u16) -> Result<PartialTreeSeeds> {
        check_alpha(alpha, self.log_n)?;

        let mut seeds = Vec::with_capacity(self.log_n);
        for depth in 0..self.log_n {
            let sibling = ((alpha as usize) >> (self.log_n - 1 - depth)) ^ 1;
            seeds.push(*self.node(row_start(depth + 1) + sibling)?);
        }
        Ok(PartialTreeSeeds(seeds))
    }

    pub fn root(&self) -> &Seed {
        &self.nodes[0]
    }

    pub fn node(&self, index: usize) -> Result<&Seed> {
        self.nodes.get(index).ok_or(Error::TreeIndexOutOfRange {
            index,
            n_nodes: self.nodes.len(),
        })
    }

    /// Seed of party `i`
    pub fn leaf(&self, i: usize) -> Result<&Seed> {
        if i >= self.n_leaves() {
            return Err(Error::TreeIndexOutOfRange {
                index: row_start(self.log_n) + i,
                n_nodes: self.nodes.len(),
            });
        }
        self.node(row_start(self.log_n) + i)
    }

    /// Seeds of all parties in order
    pub fn leaves(&self) -> &[Seed] {
        &self.nodes[row_start(self.log_n)..]
    }

    pub fn n_leaves(&self) -> usize {
        1 << self.log_n
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn height(&self) -> usize {
        self.log_n
    }
}

/// Sibling path seeds opening every leaf except one. Entry `d` is a node at depth `d + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialTreeSeeds(Vec<Seed>);

impl PartialTreeSeeds {
    pub fn new(seeds: Vec<Seed>) -> Self {
        Self(seeds)
    }

    pub fn seeds(&self) -> &[Seed] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size in bytes of the serialised seeds for a tree of depth `log_n`
    pub const fn byte_size(log_n: usize) -> usize {
        log_n * PARAM_SEED_SIZE
    }

    /// Append the seeds to `out`
    pub fn write_to(&self, out: &mut Vec<u8>) {
        for seed in self.0.iter() {
            out.extend_from_slice(seed);
        }
    }

    /// Read the seeds of a tree of depth `log_n` from `bytes`
    pub fn read_from(bytes: &[u8], log_n: usize) -> Result<Self> {
        let expected = Self::byte_size(log_n);
        if bytes.len() != expected {
            return Err(Error::InputSize {
                what: "partial tree seeds",
                expected,
                got: bytes.len(),
            });
        }
        let seeds = bytes
            .chunks_exact(PARAM_SEED_SIZE)
            .map(|chunk| {
                let mut seed = [0u8; PARAM_SEED_SIZE];
                seed.copy_from_slice(chunk);
                seed
            })
            .collect();
        Ok(Self(seeds))
    }
}

/// Seed tree rebuilt from [`PartialTreeSeeds`].
///
/// The nodes on the path from the root to leaf `alpha` are `None`. Every node that is set equals
/// the node of the full tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSeedTree {
    log_n: usize,
    alpha: u16,
    nodes: Vec<Option<Seed>>,
}

impl PartialSeedTree {
    /// Rebuild every node off the path to `alpha`.
    ///
    /// A parent on the hidden path is never hashed. Its non-hidden child is copied from `partial`,
    /// the hidden child stays unset. Every other parent is expanded like in [`SeedTree::expand`].
    pub fn expand(
        partial: &PartialTreeSeeds,
        salt: &Salt,
        alpha: u16,
        log_n: usize,
    ) -> Result<Self> {
        check_depth(log_n)?;
        check_alpha(alpha, log_n)?;
        if partial.len() != log_n {
            return Err(Error::InputSize {
                what: "partial tree seeds",
                expected: PartialTreeSeeds::byte_size(log_n),
                got: partial.len() * PARAM_SEED_SIZE,
            });
        }

        let alpha_index = alpha as usize;
        let n_parents = (1 << log_n) - 1;
        let mut nodes: Vec<Option<Seed>> = vec![None; 2 * n_parents + 1];

        for i in 0..n_parents {
            let depth = depth_of(i);
            let position = i - row_start(depth);
            let missing = alpha_index >> (log_n - depth);
            let first_child = 2 * i + 1;

            if position == missing {
                let is_right = (!alpha_index >> (log_n - 1 - depth)) & 1;
                nodes[first_child + is_right] = Some(partial.0[depth]);
            } else {
                let parent = nodes[i].ok_or(Error::MissingNode(i))?;
                let (left, right) = expand_node(salt, i, &parent);
                nodes[first_child] = Some(left);
                nodes[first_child + 1] = Some(right);
            }
        }

        Ok(Self {
            log_n,
            alpha,
            nodes,
        })
    }

    /// Index of the hidden party
    pub fn alpha(&self) -> u16 {
        self.alpha
    }

    pub fn node(&self, index: usize) -> Result<Option<&Seed>> {
        self.nodes
            .get(index)
            .map(Option::as_ref)
            .ok_or(Error::TreeIndexOutOfRange {
                index,
                n_nodes: self.nodes.len(),
            })
    }

    /// Seed of party `i`, `None` for the hidden party
    pub fn leaf(&self, i: usize) -> Result<Option<&Seed>> {
        if i >= self.n_leaves() {
            return Err(Error::TreeIndexOutOfRange {
                index: row_start(self.log_n) + i,
                n_nodes: self.nodes.len(),
            });
        }
        self.node(row_start(self.log_n) + i)
    }

    /// Iterate over `(party, seed)` of every revealed party in order
    pub fn revealed_leaves(&self) -> impl Iterator<Item = (usize, &Seed)> + '_ {
        self.nodes[row_start(self.log_n)..]
            .iter()
            .enumerate()
            .filter_map(|(i, node)| node.as_ref().map(|seed| (i, seed)))
    }

    pub fn n_leaves(&self) -> usize {
        1 << self.log_n
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }
}
