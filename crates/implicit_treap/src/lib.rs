//! Position-keyed sequences backed by an implicit treap.
//!
//! Nodes are ordered only by rank, which is recomputed from subtree sizes
//! while descending. Balance comes from random priorities: a parent never has
//! a larger priority than its children, so the expected height is logarithmic.
//! Split and merge are the only structural primitives; everything else,
//! including [`ImplicitTreap::exchange_blocks`], is expressed through them.

mod error;
mod exchange;
mod iter;
mod node;
mod treap;

pub use error::{Result, TreapError};
pub use exchange::block_len;
pub use iter::{IntoIter, Iter};
pub use treap::ImplicitTreap;
