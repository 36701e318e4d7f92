use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::trace;

use super::{FrequencyTable, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: Symbol, weight: u64 },
    Internal(Branch),
}

/// An internal node. `right` is only absent for the root of a single-symbol tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub weight: u64,
    pub left: Box<Node>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal(branch) => branch.weight,
        }
    }
}

impl Branch {
    fn merge(left: Node, right: Node) -> Self {
        Self {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Some(Box::new(right)),
        }
    }

    fn wrap(only: Node) -> Self {
        Self {
            weight: only.weight(),
            left: Box::new(only),
            right: None,
        }
    }

    /// Bit 0 selects the left child, bit 1 the right.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match bit {
            false => Some(&self.left),
            true => self.right.as_deref(),
        }
    }
}

// Internal nodes sort before every leaf of equal weight; among themselves they
// keep creation order. Leaves sort by code point. No two candidates share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Internal(usize),
    Leaf(Symbol),
}

struct Candidate {
    weight: u64,
    rank: Rank,
    node: Node,
}

impl Candidate {
    fn leaf(symbol: Symbol, weight: u64) -> Self {
        Self {
            weight,
            rank: Rank::Leaf(symbol),
            node: Node::Leaf { symbol, weight },
        }
    }

    fn internal(branch: Branch, sequence: usize) -> Self {
        Self {
            weight: branch.weight,
            rank: Rank::Internal(sequence),
            node: Node::Internal(branch),
        }
    }

    fn key(&self) -> (u64, Rank) {
        (self.weight, self.rank)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Branch,
}

impl HuffmanTree {
    /// Returns `None` for an empty table.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<Self> {
        Self::from_leaves(frequencies.iter())
    }

    fn from_leaves<I>(leaves: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Symbol, u64)>,
    {
        let mut heap = leaves
            .into_iter()
            .map(|(symbol, weight)| Reverse(Candidate::leaf(symbol, weight)))
            .collect::<BinaryHeap<_>>();

        let root = match heap.len() {
            0 => return None,
            1 => {
                let Reverse(only) = heap.pop()?;
                Branch::wrap(only.node)
            }
            _ => {
                let mut sequence = 0;
                loop {
                    let Reverse(left) = heap.pop()?;
                    let Reverse(right) = heap.pop()?;
                    trace!(
                        "merge #{sequence}: {:?} ({}) + {:?} ({})",
                        left.rank,
                        left.weight,
                        right.rank,
                        right.weight
                    );

                    let branch = Branch::merge(left.node, right.node);
                    if heap.is_empty() {
                        break branch;
                    }
                    heap.push(Reverse(Candidate::internal(branch, sequence)));
                    sequence += 1;
                }
            }
        };

        Some(Self { root })
    }

    pub fn root(&self) -> &Branch {
        &self.root
    }

    pub fn weight(&self) -> u64 {
        self.root.weight
    }
}
