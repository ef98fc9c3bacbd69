pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prio: u32,
    pub(crate) size: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            prio: self.prio,
            size: self.size,
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, prio: u32) -> Self {
        Self {
            value,
            prio,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn size(node: &Link<T>) -> usize {
        node.as_ref().map(|n| n.size).unwrap_or(0)
    }

    /// Refreshes the cached size after a child slot changed. Heap order is
    /// asserted against the new children only.
    fn recalc(&mut self) {
        self.size = 1 + Self::size(&self.left) + Self::size(&self.right);
        debug_assert!(
            self.left.as_ref().is_none_or(|child| self.prio <= child.prio),
            "heap order violated on left child"
        );
        debug_assert!(
            self.right.as_ref().is_none_or(|child| self.prio <= child.prio),
            "heap order violated on right child"
        );
    }
}

/// Splits `root` into its first `left_count` nodes and the remainder.
///
/// `left_count` must not exceed the size of `root`.
pub(crate) fn split<T>(root: Link<T>, left_count: usize) -> (Link<T>, Link<T>) {
    let mut node = match root {
        Some(node) => node,
        None => return (None, None),
    };
    if left_count == 0 {
        return (None, Some(node));
    }
    if left_count >= node.size {
        return (Some(node), None);
    }

    let left_size = Node::size(&node.left);
    if left_size < left_count {
        let (left, right) = split(node.right.take(), left_count - left_size - 1);
        node.right = left;
        node.recalc();
        (Some(node), right)
    } else {
        let (left, right) = split(node.left.take(), left_count);
        node.left = right;
        node.recalc();
        (left, Some(node))
    }
}

/// Concatenates two trees. Every node of `left` is placed before every node
/// of `right`; the root with the smaller priority wins, ties go to `right`.
pub(crate) fn merge<T>(left: Link<T>, right: Link<T>) -> Link<T> {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (Some(mut left), Some(mut right)) => {
            if left.prio < right.prio {
                left.right = merge(left.right.take(), Some(right));
                left.recalc();
                Some(left)
            } else {
                right.left = merge(Some(left), right.left.take());
                right.recalc();
                Some(right)
            }
        }
    }
}

pub(crate) fn get<T>(node: &Link<T>, index: usize) -> Option<&T> {
    let node_ref = node.as_deref()?;
    let left_size = Node::size(&node_ref.left);
    if index < left_size {
        get(&node_ref.left, index)
    } else if index == left_size {
        Some(&node_ref.value)
    } else {
        get(&node_ref.right, index - left_size - 1)
    }
}

pub(crate) fn get_mut<T>(node: &mut Link<T>, index: usize) -> Option<&mut T> {
    let node_ref = node.as_deref_mut()?;
    let left_size = Node::size(&node_ref.left);
    if index < left_size {
        get_mut(&mut node_ref.left, index)
    } else if index == left_size {
        Some(&mut node_ref.value)
    } else {
        get_mut(&mut node_ref.right, index - left_size - 1)
    }
}

/// Walks the whole tree and panics on a stale size or a heap-order violation.
/// Returns the number of nodes.
#[cfg(test)]
pub(crate) fn check<T>(node: &Link<T>) -> usize {
    let Some(node_ref) = node.as_deref() else {
        return 0;
    };
    for child in [&node_ref.left, &node_ref.right].into_iter().flatten() {
        assert!(
            node_ref.prio <= child.prio,
            "heap order violated: parent {} > child {}",
            node_ref.prio,
            child.prio
        );
    }
    let size = 1 + check(&node_ref.left) + check(&node_ref.right);
    assert_eq!(node_ref.size, size, "stale subtree size");
    size
}
