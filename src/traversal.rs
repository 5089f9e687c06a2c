//! Iterators over the keys of a [`Tree`][crate::Tree].
//!
//! All three keep their own stack on the heap instead of recursing, so a tree that has
//! degenerated into a long chain can be walked without running out of call stack.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! //       5
//! //     /   \
//! //    1     6
//! //     \
//! //      4
//! let tree: Tree<i32> = [5, 1, 4, 6].into_iter().collect();
//!
//! assert!(tree.pre_order().copied().eq([5, 1, 4, 6]));
//! assert!(tree.in_order().copied().eq([1, 4, 5, 6]));
//! assert!(tree.post_order().copied().eq([4, 1, 6, 5]));
//! ```

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::tree::{Link, Node};

/// Node, then left subtree, then right subtree. Returned by
/// [`Tree::pre_order`][crate::Tree::pre_order].
pub struct PreOrder<'a, K> {
    stack: Vec<NonNull<Node<K>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<K>>,
}

/// Left subtree, then node, then right subtree, i.e. ascending key order. Returned by
/// [`Tree::in_order`][crate::Tree::in_order].
pub struct InOrder<'a, K> {
    stack: Vec<NonNull<Node<K>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<K>>,
}

/// Left subtree, then right subtree, then node. Returned by
/// [`Tree::post_order`][crate::Tree::post_order].
pub struct PostOrder<'a, K> {
    /// The flag is set once a node's children have been pushed above it.
    stack: Vec<(NonNull<Node<K>>, bool)>,
    remaining: usize,
    marker: PhantomData<&'a Node<K>>,
}

/// Reborrows a node for the lifetime of the iterator.
///
/// # Safety
///
/// The iterator must borrow the tree `node` lives in for `'a`.
unsafe fn deref<'a, K>(node: NonNull<Node<K>>) -> &'a Node<K> {
    &*node.as_ptr()
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        Self {
            stack: root.0.into_iter().collect(),
            remaining: len,
            marker: PhantomData,
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: Iterators are only built by `Tree` methods that borrow the tree for `'a`.
        let node = unsafe { deref::<'a, K>(self.stack.pop()?) };
        // Right goes on first so left comes off first.
        self.stack.extend(node.right.0);
        self.stack.extend(node.left.0);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
            marker: PhantomData,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `link` and all of its left descendants so the leftmost ends up on top.
    fn push_left_spine(&mut self, mut link: Link<K>) {
        while let Some(ptr) = link.0 {
            self.stack.push(ptr);
            // SAFETY: See `next`.
            link = unsafe { deref::<'a, K>(ptr) }.left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: Iterators are only built by `Tree` methods that borrow the tree for `'a`.
        let node = unsafe { deref::<'a, K>(self.stack.pop()?) };
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        Self {
            stack: root.0.map(|root| (root, false)).into_iter().collect(),
            remaining: len,
            marker: PhantomData,
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (ptr, expanded) = self.stack.pop()?;
            // SAFETY: Iterators are only built by `Tree` methods that borrow the tree for `'a`.
            let node = unsafe { deref::<'a, K>(ptr) };
            if expanded {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(&node.key);
            }

            self.stack.push((ptr, true));
            self.stack.extend(node.right.0.map(|right| (right, false)));
            self.stack.extend(node.left.0.map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

macro_rules! impl_traversal_traits {
    ($($iter:ident),*) => {$(
        impl<K> Clone for $iter<'_, K> {
            fn clone(&self) -> Self {
                Self {
                    stack: self.stack.clone(),
                    remaining: self.remaining,
                    marker: PhantomData,
                }
            }
        }

        impl<K> ExactSizeIterator for $iter<'_, K> {}
        impl<K> FusedIterator for $iter<'_, K> {}

        // SAFETY: The iterator only hands out `&K`, like an iterator over `&[K]` would.
        unsafe impl<K: Sync> Send for $iter<'_, K> {}
        // SAFETY: As above.
        unsafe impl<K: Sync> Sync for $iter<'_, K> {}
    )*};
}

impl_traversal_traits!(PreOrder, InOrder, PostOrder);
