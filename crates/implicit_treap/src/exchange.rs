use std::ops::{Bound, RangeBounds};

use log::trace;
use rand::Rng;

use crate::error::{Result, TreapError};
use crate::node::{self, Node};
use crate::treap::ImplicitTreap;

/// Length of the blocks swapped by [`ImplicitTreap::exchange_blocks`] on a
/// sequence of length `len`. Requires `i <= j <= len`.
pub fn block_len(i: usize, j: usize, len: usize) -> usize {
    (j - i).min(len - j)
}

fn resolve_range<B: RangeBounds<usize>>(range: &B, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    (start, end)
}

impl<T, R: Rng> ImplicitTreap<T, R> {
    /// Swaps the block of `min(j - i, len - j)` elements starting at `i` with
    /// the equally long block starting at `j`. Elements between the two blocks
    /// keep their order.
    ///
    /// ```
    /// use implicit_treap::ImplicitTreap;
    ///
    /// let mut seq = ImplicitTreap::with_seed(1);
    /// seq.extend(0..8);
    /// seq.exchange_blocks(1, 5).unwrap();
    /// assert_eq!(seq.to_vec(), [0, 5, 6, 7, 4, 1, 2, 3]);
    /// ```
    pub fn exchange_blocks(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.len();
        if i > j || j > len {
            return Err(TreapError::InvalidBlocks { i, j, len });
        }
        let m = block_len(i, j, len);
        if m == 0 {
            return Ok(());
        }

        let (a, b) = node::split(self.root.take(), i);
        let (c, d) = node::split(b, m);
        let (e, f) = node::split(d, j - (i + m));
        let (g, h) = node::split(f, m);
        trace!(
            "exchange_blocks i={i} j={j} m={m}: fragments {} {} {} {} {}",
            Node::size(&a),
            Node::size(&c),
            Node::size(&e),
            Node::size(&g),
            Node::size(&h)
        );

        let root = node::merge(a, g);
        let root = node::merge(root, e);
        let root = node::merge(root, c);
        self.root = node::merge(root, h);
        Ok(())
    }

    /// Rotates the elements of `range` left by `k` positions, so the element
    /// at `range.start + k` moves to `range.start`.
    pub fn rotate_left<B: RangeBounds<usize>>(&mut self, range: B, k: usize) -> Result<()> {
        let len = self.len();
        let (start, end) = resolve_range(&range, len);
        if start > end || end > len || k > end - start {
            return Err(TreapError::InvalidRotation { start, end, k, len });
        }
        if k == 0 || k == end - start {
            return Ok(());
        }

        let (left, rest) = node::split(self.root.take(), start);
        let (mid, right) = node::split(rest, end - start);
        let (head, tail) = node::split(mid, k);
        trace!("rotate_left {start}..{end} by {k}");

        self.root = node::merge(node::merge(left, node::merge(tail, head)), right);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::block_len;
    use crate::error::TreapError;
    use crate::treap::ImplicitTreap;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn expected_exchange(seq: &[u32], i: usize, j: usize) -> Vec<u32> {
        let m = block_len(i, j, seq.len());
        [
            &seq[..i],
            &seq[j..j + m],
            &seq[i + m..j],
            &seq[i..i + m],
            &seq[j + m..],
        ]
        .concat()
    }

    #[test]
    fn exchange_known_sequence() {
        let mut treap = ImplicitTreap::with_seed(0);
        treap.extend(0..8);
        treap.exchange_blocks(1, 5).unwrap();
        assert_eq!(treap.to_vec(), vec![0, 5, 6, 7, 4, 1, 2, 3]);
        treap.exchange_blocks(2, 4).unwrap();
        assert_eq!(treap.to_vec(), vec![0, 5, 4, 1, 6, 7, 2, 3]);
    }

    #[test]
    fn exchange_same_position_is_noop() {
        let mut treap = ImplicitTreap::with_seed(4);
        treap.extend(0..10);
        for i in 0..=10 {
            treap.exchange_blocks(i, i).unwrap();
        }
        treap.exchange_blocks(3, 10).unwrap();
        assert_eq!(treap.to_vec(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn invalid_blocks_leave_sequence_untouched() {
        let mut treap = ImplicitTreap::with_seed(6);
        treap.extend(0..5);
        assert_eq!(
            treap.exchange_blocks(3, 2),
            Err(TreapError::InvalidBlocks { i: 3, j: 2, len: 5 })
        );
        assert_eq!(
            treap.exchange_blocks(1, 6),
            Err(TreapError::InvalidBlocks { i: 1, j: 6, len: 5 })
        );
        assert_eq!(treap.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn adjacent_exchange_rotates() {
        let mut treap = ImplicitTreap::with_seed(8);
        treap.extend(0..6);
        treap.exchange_blocks(0, 3).unwrap();
        assert_eq!(treap.to_vec(), vec![3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn exchange_matches_slice_formula() {
        let mut rng = StdRng::seed_from_u64(0xB10C_0001);
        for n in [1_usize, 2, 3, 7, 16, 33, 100] {
            let mut seq: Vec<u32> = (0..n as u32).collect();
            let mut treap = ImplicitTreap::from_values(seq.clone(), StdRng::seed_from_u64(n as u64));
            for _ in 0..200 {
                let j = rng.random_range(0..=n);
                let i = rng.random_range(0..=j);
                treap.exchange_blocks(i, j).unwrap();
                seq = expected_exchange(&seq, i, j);
                assert_eq!(treap.to_vec(), seq, "n={n} i={i} j={j}");
            }
        }
    }

    #[test]
    fn rotate_left_matches_slice() {
        let mut rng = StdRng::seed_from_u64(0xB10C_0002);
        let mut seq: Vec<u32> = (0..64).collect();
        let mut treap = ImplicitTreap::from_values(seq.clone(), StdRng::seed_from_u64(2));
        for _ in 0..300 {
            let end = rng.random_range(0..=seq.len());
            let start = rng.random_range(0..=end);
            let k = rng.random_range(0..=end - start);
            treap.rotate_left(start..end, k).unwrap();
            seq[start..end].rotate_left(k);
            assert_eq!(treap.to_vec(), seq);
        }
        treap.rotate_left(.., 5).unwrap();
        seq.rotate_left(5);
        treap.rotate_left(10..=20, 11).unwrap();
        assert_eq!(treap.to_vec(), seq);
    }

    #[test]
    fn invalid_rotation_is_rejected() {
        let mut treap = ImplicitTreap::with_seed(12);
        treap.extend(0..4);
        assert_eq!(
            treap.rotate_left(1..3, 3),
            Err(TreapError::InvalidRotation {
                start: 1,
                end: 3,
                k: 3,
                len: 4
            })
        );
        assert!(treap.rotate_left(2..9, 0).is_err());
        assert_eq!(treap.to_vec(), vec![0, 1, 2, 3]);
    }
}
