//! An unbalanced BST whose nodes point back at their parents. The parent pointers make
//! predecessor/successor walks and removal possible without re-searching from the root.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//! assert_eq!(tree.minimum(), None);
//!
//! for key in [5, 1, 4, 3, 2, 6] {
//!     tree.insert(key);
//! }
//! assert!(tree.in_order().copied().eq(1..=6));
//!
//! // Handles walk the tree in sorted order.
//! let four = tree.search(&4).unwrap();
//! assert_eq!(four.predecessor().map(|n| *n.key()), Some(3));
//! assert_eq!(four.successor().map(|n| *n.key()), Some(5));
//!
//! // Removing a node with two children moves its successor's key into its place.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.root().map(|n| *n.key()), Some(6));
//! assert!(tree.in_order().copied().eq([1, 2, 3, 4, 6]));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use log::{debug, trace};

use crate::error::{InvariantError, Result};
use crate::traversal::{InOrder, PostOrder, PreOrder};

/// An unbalanced Binary Search Tree of keys. Inserting a key equal to one already stored replaces
/// the stored key in place, so the tree never holds two keys that compare equal.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
    marker: PhantomData<Box<Node<K>>>,
}

// SAFETY: A `Tree` owns its nodes exactly like a `Box` would. The raw pointers are never shared
// outside of borrows of the tree itself.
unsafe impl<K: Send> Send for Tree<K> {}
// SAFETY: See above. Shared access only ever hands out `&K`.
unsafe impl<K: Sync> Sync for Tree<K> {}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let Some(root) = self.root.0 else {
            return tree;
        };

        // SAFETY: Every node reachable from `self.root` is live while `self` is borrowed. The
        // copies are freshly allocated and only reachable through `tree`.
        unsafe {
            let new_root = Node::new_leaked(root.as_ref().key.clone(), Link(None));
            tree.root = Link(Some(new_root));
            tree.len = self.len;

            let mut stack = vec![(root, new_root)];
            while let Some((source, mut copy)) = stack.pop() {
                let source = source.as_ref();
                if let Some(left) = source.left.0 {
                    let new_left = Node::new_leaked(left.as_ref().key.clone(), Link(Some(copy)));
                    copy.as_mut().left = Link(Some(new_left));
                    stack.push((left, new_left));
                }
                if let Some(right) = source.right.0 {
                    let new_right = Node::new_leaked(right.as_ref().key.clone(), Link(Some(copy)));
                    copy.as_mut().right = Link(Some(new_right));
                    stack.push((right, new_right));
                }
            }
        }

        tree
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("keys", &self.in_order().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
            marker: PhantomData,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A handle to the root node, if there is one.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        // SAFETY: The root is live and can't change while `self` is borrowed.
        self.root.0.map(|root| unsafe { NodeRef::new(root) })
    }

    /// A handle to the node holding the smallest key.
    pub fn first(&self) -> Option<NodeRef<'_, K>> {
        self.root().map(NodeRef::minimum)
    }

    /// A handle to the node holding the largest key.
    pub fn last(&self) -> Option<NodeRef<'_, K>> {
        self.root().map(NodeRef::maximum)
    }

    /// The smallest key in the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.minimum(), None);
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.minimum(), Some(&1));
    /// ```
    pub fn minimum(&self) -> Option<&K> {
        self.first().map(|node| node.key())
    }

    /// The largest key in the tree, or `None` if the tree is empty.
    pub fn maximum(&self) -> Option<&K> {
        self.last().map(|node| node.key())
    }

    /// Visits every key, each node before its left subtree and its left subtree before its
    /// right.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root, self.len)
    }

    /// Visits every key in ascending order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root, self.len)
    }

    /// Visits every key, both subtrees of a node before the node itself.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root, self.len)
    }

    /// Same as [`Tree::in_order`].
    pub fn iter(&self) -> InOrder<'_, K> {
        self.in_order()
    }

    /// A printable picture of the tree: one line per node in pre-order, each naming its parent
    /// and which side of the parent it hangs from.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = [5, 1, 6].into_iter().collect();
    /// assert_eq!(
    ///     tree.diagram().to_string(),
    ///     " 5 is root\n 1 is  5's   left child\n 6 is  5's  right child\n",
    /// );
    /// ```
    pub fn diagram(&self) -> Diagram<'_, K> {
        Diagram { tree: self }
    }

    /// Writes [`Tree::diagram`] to stdout.
    pub fn print(&self)
    where
        K: fmt::Display,
    {
        print!("{}", self.diagram());
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        let released = self.release_all();
        debug!("clear: released {} nodes", released);
    }

    /// Frees every node without recursing, returning how many were freed.
    fn release_all(&mut self) -> usize {
        let mut released = 0;
        let mut stack: Vec<_> = self.root.take().0.into_iter().collect();
        while let Some(node) = stack.pop() {
            // SAFETY: Every node was allocated by `Node::new_leaked` and is owned by exactly one
            // link. We took the root link above and push each child link exactly once, so each
            // node is freed once and nothing can reach it afterwards.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            stack.extend(node.left.0);
            stack.extend(node.right.0);
            released += 1;
        }
        self.len = 0;
        released
    }

    /// Walks the whole tree and reports the first broken structural invariant, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<i32> = (0..10).rev().collect();
    /// tree.remove(&4);
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<()>
    where
        K: Ord,
    {
        let Some(root) = self.root() else {
            return match self.len {
                0 => Ok(()),
                recorded => Err(InvariantError::LenMismatch {
                    recorded,
                    reachable: 0,
                }),
            };
        };
        if root.parent().is_some() {
            return Err(InvariantError::RootHasParent);
        }

        let mut reachable = 0;
        let mut stack = vec![(root, 0)];
        while let Some((node, depth)) = stack.pop() {
            reachable += 1;
            for child in [node.left(), node.right()].into_iter().flatten() {
                if child.parent() != Some(node) {
                    return Err(InvariantError::ParentMismatch { depth: depth + 1 });
                }
                stack.push((child, depth + 1));
            }
        }
        if reachable != self.len {
            return Err(InvariantError::LenMismatch {
                recorded: self.len,
                reachable,
            });
        }

        let keys: Vec<_> = self.in_order().collect();
        match keys.windows(2).position(|pair| pair[0] > pair[1]) {
            Some(position) => Err(InvariantError::OutOfOrder {
                position: position + 1,
            }),
            None => Ok(()),
        }
    }

    /// Finds the node with the given key by walking down from the root. The walk is a loop, so
    /// a tree that has degenerated into a chain is searched without growing the call stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<NodeRef<'_, K>>
    where
        K: Ord,
    {
        // SAFETY: Nodes reachable from the root are live and unchanged while `self` is borrowed.
        self.find(key).map(|node| unsafe { NodeRef::new(node) })
    }

    /// Another name for [`Tree::search`]. Both walk down with a loop and behave identically.
    pub fn iterative_search(&self, key: &K) -> Option<NodeRef<'_, K>>
    where
        K: Ord,
    {
        // SAFETY: Nodes reachable from the root are live and unchanged while `self` is borrowed.
        self.find(key).map(|node| unsafe { NodeRef::new(node) })
    }

    /// Whether a key equal to `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Finds the node with the given key and returns a handle that can remove it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// let node = tree.search_mut(&2).unwrap();
    ///
    /// assert_eq!(node.remove(), 2);
    /// assert!(tree.in_order().copied().eq([1, 3]));
    /// ```
    pub fn search_mut(&mut self, key: &K) -> Option<NodeMut<'_, K>>
    where
        K: Ord,
    {
        let node = self.find(key)?;
        Some(NodeMut { tree: self, node })
    }

    /// Inserts the given key into the tree and returns a handle to the node now holding it.
    /// Inserting a key equal to one already in the tree overwrites the stored key without
    /// creating a node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let node = tree.insert(1);
    /// assert!(node.is_root());
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> NodeRef<'_, K>
    where
        K: Ord,
    {
        let Some(mut current) = self.root.0 else {
            let root = Node::new_leaked(key, Link(None));
            self.root = Link(Some(root));
            self.len += 1;
            trace!("insert: new root");
            // SAFETY: The root was just allocated and belongs to `self`, which stays borrowed for
            // as long as the handle lives.
            return unsafe { NodeRef::new(root) };
        };

        let mut depth = 0;
        loop {
            // SAFETY: Every node reachable from the root is live, and holding `&mut self` means
            // nothing else references it.
            let node = unsafe { current.as_mut() };
            let link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    node.key = key;
                    trace!("insert: overwrote key at depth {}", depth);
                    // SAFETY: See above. The node stays put, only its key changed.
                    return unsafe { NodeRef::new(current) };
                }
            };

            match link.0 {
                Some(child) => {
                    current = child;
                    depth += 1;
                }
                None => {
                    let leaf = Node::new_leaked(key, Link(Some(current)));
                    link.0 = Some(leaf);
                    self.len += 1;
                    trace!("insert: new leaf at depth {}", depth + 1);
                    // SAFETY: The leaf was just linked into the tree owned by `self`.
                    return unsafe { NodeRef::new(leaf) };
                }
            }
        }
    }

    /// Removes the node holding `key` from the tree and returns the stored key. If the tree does
    /// not contain the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        self.search_mut(key).map(NodeMut::remove)
    }

    fn find(&self, key: &K) -> Option<NonNull<Node<K>>>
    where
        K: Ord,
    {
        let mut current = self.root.0;
        while let Some(node) = current {
            // SAFETY: Nodes reachable from the root are live while `self` is borrowed.
            let node_ref = unsafe { node.as_ref() };
            current = match key.cmp(&node_ref.key) {
                Ordering::Less => node_ref.left.0,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node_ref.right.0,
            };
        }
        None
    }

    /// Unlinks `target` from the tree and returns its key.
    ///
    /// A node with at most one child is spliced out directly. A node with two children stays in
    /// place: its successor (which has no left child) is spliced out instead and the successor's
    /// key moves into `target`.
    fn excise(&mut self, target: NonNull<Node<K>>) -> K {
        // SAFETY: `target` was found by walking this tree under `&mut self`, so it and every node
        // reachable from it are live and nothing else references them. That holds for the
        // remainder of this function.
        let two_children = unsafe {
            let target = target.as_ref();
            target.left.0.is_some() && target.right.0.is_some()
        };
        let spliced = if two_children {
            // SAFETY: See above.
            unsafe { Node::successor(target) }.expect("A node with a right child has a successor")
        } else {
            target
        };

        // SAFETY: `spliced` is either `target` or a node in its right subtree.
        let (left, right, parent) = unsafe {
            let spliced = spliced.as_ref();
            (spliced.left, spliced.right, spliced.parent)
        };
        let child = if left.0.is_some() { left } else { right };

        if let Some(mut child) = child.0 {
            // SAFETY: `child` is live and no reference to it is held.
            unsafe { child.as_mut().parent = parent };
        }
        match parent.0 {
            None => self.root = child,
            Some(mut parent) => {
                // SAFETY: `parent` is live and no reference to it is held.
                let parent = unsafe { parent.as_mut() };
                if parent.left.0 == Some(spliced) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }
        self.len -= 1;

        if cfg!(debug_assertions) {
            if let Some(child) = child.0 {
                // SAFETY: `child` is still linked into the tree.
                assert!(unsafe { child.as_ref() }.parent == parent);
            }
        }

        // SAFETY: `spliced` was allocated by `Node::new_leaked` and the splice above removed the
        // only link that owned it. Its children (at most one) were handed to its parent, so
        // freeing it frees nothing else and nothing can reach it afterwards.
        let Node { key, .. } = *unsafe { Box::from_raw(spliced.as_ptr()) };
        trace!(
            "remove: spliced out {} node, {} remaining",
            if two_children { "successor" } else { "target" },
            self.len
        );

        if two_children {
            // SAFETY: `target` is still linked into the tree and we hold `&mut self`.
            unsafe { mem::replace(&mut (*target.as_ptr()).key, key) }
        } else {
            key
        }
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// Returned by [`Tree::diagram`].
pub struct Diagram<'a, K> {
    tree: &'a Tree<K>,
}

impl<K> fmt::Display for Diagram<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root() else {
            return writeln!(f, "empty tree");
        };

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            match node.parent() {
                None => writeln!(f, "{:>2} is root", node.key())?,
                Some(parent) => {
                    let side = if parent.left() == Some(node) {
                        "left"
                    } else {
                        "right"
                    };
                    writeln!(
                        f,
                        "{:>2} is {:>2}'s {:>6} child",
                        node.key(),
                        parent.key(),
                        side
                    )?;
                }
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }
        Ok(())
    }
}

/// A shared handle to a node. It borrows the tree, so the node can't be removed (or the tree
/// changed at all) while the handle exists.
pub struct NodeRef<'a, K> {
    node: NonNull<Node<K>>,
    marker: PhantomData<&'a Node<K>>,
}

// SAFETY: A `NodeRef` is equivalent to a `&Node<K>`.
unsafe impl<K: Sync> Send for NodeRef<'_, K> {}
// SAFETY: As above.
unsafe impl<K: Sync> Sync for NodeRef<'_, K> {}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for NodeRef<'_, K> {}

/// Handles compare by identity: two handles are equal when they point at the same node.
impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}
impl<K> Eq for NodeRef<'_, K> {}

impl<K> fmt::Debug for NodeRef<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("parent", &self.parent().map(|n| n.key()))
            .finish()
    }
}

impl<'a, K> NodeRef<'a, K> {
    /// # Safety
    ///
    /// `node` and everything reachable from it must stay live and unmodified for `'a`.
    unsafe fn new(node: NonNull<Node<K>>) -> Self {
        Self {
            node,
            marker: PhantomData,
        }
    }

    fn node(&self) -> &'a Node<K> {
        // SAFETY: Guaranteed by the contract of `NodeRef::new`.
        unsafe { &*self.node.as_ptr() }
    }

    fn link(&self, link: Link<K>) -> Option<Self> {
        // SAFETY: Nodes linked from a live node in the same tree are covered by the same borrow.
        link.0.map(|node| unsafe { Self::new(node) })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// The node this node hangs from, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent)
    }

    /// The left child.
    pub fn left(&self) -> Option<Self> {
        self.link(self.node().left)
    }

    /// The right child.
    pub fn right(&self) -> Option<Self> {
        self.link(self.node().right)
    }

    /// Whether this is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.node().parent.0.is_none()
    }

    /// The node holding the smallest key in the subtree rooted here.
    pub fn minimum(self) -> Self {
        // SAFETY: Covered by the borrow this handle holds.
        unsafe { Self::new(Node::minimum(self.node)) }
    }

    /// The node holding the largest key in the subtree rooted here.
    pub fn maximum(self) -> Self {
        // SAFETY: Covered by the borrow this handle holds.
        unsafe { Self::new(Node::maximum(self.node)) }
    }

    /// The node holding the greatest key less than this node's key, or `None` if this node holds
    /// the smallest key in the tree.
    pub fn predecessor(self) -> Option<Self> {
        // SAFETY: Covered by the borrow this handle holds.
        unsafe { Node::predecessor(self.node).map(|node| Self::new(node)) }
    }

    /// The node holding the least key greater than this node's key, or `None` if this node holds
    /// the largest key in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = [2, 3, 1].into_iter().collect();
    ///
    /// let mut keys = Vec::new();
    /// let mut node = tree.first();
    /// while let Some(n) = node {
    ///     keys.push(*n.key());
    ///     node = n.successor();
    /// }
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn successor(self) -> Option<Self> {
        // SAFETY: Covered by the borrow this handle holds.
        unsafe { Node::successor(self.node).map(|node| Self::new(node)) }
    }
}

/// An exclusive handle to a node, obtained from [`Tree::search_mut`]. Removing the node consumes
/// the handle.
pub struct NodeMut<'a, K> {
    tree: &'a mut Tree<K>,
    node: NonNull<Node<K>>,
}

impl<K> fmt::Debug for NodeMut<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeMut").field(self.key()).finish()
    }
}

impl<'a, K> NodeMut<'a, K> {
    /// The key stored in this node.
    pub fn key(&self) -> &K {
        // SAFETY: The node is live while the tree is borrowed through this handle.
        unsafe { &self.node.as_ref().key }
    }

    /// A shared handle for navigating from this node.
    pub fn get(&self) -> NodeRef<'_, K> {
        // SAFETY: `&self` keeps the tree from being modified while the `NodeRef` lives.
        unsafe { NodeRef::new(self.node) }
    }

    /// Turns this into a shared handle that lives as long as the original borrow of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// let node = tree.search_mut(&1).unwrap().into_ref();
    ///
    /// assert_eq!(node.successor().map(|n| *n.key()), Some(2));
    /// assert!(node.predecessor().is_none());
    /// ```
    pub fn into_ref(self) -> NodeRef<'a, K> {
        // SAFETY: The exclusive borrow is consumed, so nothing can modify the tree during `'a`.
        unsafe { NodeRef::new(self.node) }
    }

    /// Removes this node's key from the tree and returns it.
    pub fn remove(self) -> K {
        self.tree.excise(self.node)
    }
}

/// A possibly empty owning pointer to a `Node`. The same type doubles as the non-owning parent
/// pointer; which one it is depends only on which field it sits in.
pub(crate) struct Link<K>(pub(crate) Option<NonNull<Node<K>>>);

impl<K> Clone for Link<K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for Link<K> {}

impl<K> PartialEq for Link<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K> Link<K> {
    fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) parent: Link<K>,
}

impl<K> Node<K> {
    /// Allocates a childless node. Ownership of the allocation passes to whichever link the
    /// pointer is stored in.
    fn new_leaked(key: K, parent: Link<K>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node {
            key,
            left: Link(None),
            right: Link(None),
            parent,
        })))
    }

    /// # Safety
    ///
    /// `node` and every node below it must be live.
    unsafe fn minimum(mut node: NonNull<Self>) -> NonNull<Self> {
        while let Some(left) = node.as_ref().left.0 {
            node = left;
        }
        node
    }

    /// # Safety
    ///
    /// `node` and every node below it must be live.
    unsafe fn maximum(mut node: NonNull<Self>) -> NonNull<Self> {
        while let Some(right) = node.as_ref().right.0 {
            node = right;
        }
        node
    }

    /// # Safety
    ///
    /// Every node in the tree containing `node` must be live.
    unsafe fn predecessor(node: NonNull<Self>) -> Option<NonNull<Self>> {
        if let Some(left) = node.as_ref().left.0 {
            return Some(Self::maximum(left));
        }

        // Climb while we're a left child. The first ancestor we reach from its right side is
        // the predecessor.
        let mut child = node;
        let mut parent = node.as_ref().parent.0;
        while let Some(ancestor) = parent {
            if ancestor.as_ref().left.0 != Some(child) {
                break;
            }
            child = ancestor;
            parent = ancestor.as_ref().parent.0;
        }
        parent
    }

    /// # Safety
    ///
    /// Every node in the tree containing `node` must be live.
    unsafe fn successor(node: NonNull<Self>) -> Option<NonNull<Self>> {
        if let Some(right) = node.as_ref().right.0 {
            return Some(Self::minimum(right));
        }

        let mut child = node;
        let mut parent = node.as_ref().parent.0;
        while let Some(ancestor) = parent {
            if ancestor.as_ref().right.0 != Some(child) {
                break;
            }
            child = ancestor;
            parent = ancestor.as_ref().parent.0;
        }
        parent
    }
}
