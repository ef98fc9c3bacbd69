use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, TreapError};
use crate::iter::{IntoIter, Iter};
use crate::node::{self, Link, Node};

/// A sequence stored as an implicit treap: elements are addressed by rank,
/// and every node carries a random priority drawn from `R` when it is created.
pub struct ImplicitTreap<T, R = StdRng> {
    pub(crate) root: Link<T>,
    rng: R,
}

impl<T> ImplicitTreap<T> {
    /// Empty sequence with an OS-seeded priority generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T, R: Rng> ImplicitTreap<T, R> {
    pub fn with_rng(rng: R) -> Self {
        Self { root: None, rng }
    }

    /// Builds a sequence by merging one singleton per value, in order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I, rng: R) -> Self {
        let mut treap = Self::with_rng(rng);
        treap.extend(values);
        treap
    }

    pub fn len(&self) -> usize {
        Node::size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        node::get(&self.root, index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        node::get_mut(&mut self.root, index)
    }

    pub fn push_back(&mut self, value: T) {
        let single = self.singleton(value);
        self.root = node::merge(self.root.take(), single);
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(TreapError::IndexOutOfRange { index, len });
        }
        let single = self.singleton(value);
        let (left, right) = node::split(self.root.take(), index);
        self.root = node::merge(node::merge(left, single), right);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(TreapError::IndexOutOfRange { index, len });
        }
        let (left, rest) = node::split(self.root.take(), index);
        let (target, right) = node::split(rest, 1);
        self.root = node::merge(left, right);
        let target = target.expect("validated index yields one node");
        Ok(target.value)
    }

    /// Appends every node of `other` after the last element of `self`.
    /// `other`'s generator is dropped.
    pub fn append(&mut self, other: Self) {
        self.root = node::merge(self.root.take(), other.root);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn singleton(&mut self, value: T) -> Link<T> {
        Some(Box::new(Node::new(value, self.rng.random())))
    }
}

impl<T, R: Rng + SeedableRng> ImplicitTreap<T, R> {
    /// Keeps `[0, at)` in `self` and returns `[at, len)` as a new sequence
    /// whose generator is seeded from `self`'s.
    pub fn split_off(&mut self, at: usize) -> Result<Self> {
        let len = self.len();
        if at > len {
            return Err(TreapError::IndexOutOfRange { index: at, len });
        }
        let (left, right) = node::split(self.root.take(), at);
        self.root = left;
        Ok(Self {
            root: right,
            rng: R::from_rng(&mut self.rng),
        })
    }
}

impl<T: Clone, R: Clone> Clone for ImplicitTreap<T, R> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T> Default for ImplicitTreap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug, R> std::fmt::Debug for ImplicitTreap<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(Iter::new(&self.root)).finish()
    }
}

impl<T, R: Rng> Extend<T> for ImplicitTreap<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for ImplicitTreap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut treap = Self::new();
        treap.extend(iter);
        treap
    }
}

impl<T, R> IntoIterator for ImplicitTreap<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}

impl<'a, T, R: Rng> IntoIterator for &'a ImplicitTreap<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
