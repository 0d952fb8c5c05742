use core::fmt;
use core::iter::FusedIterator;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use crate::Node;

/// An iterator over the nodes of a [`List`](crate::List).
///
/// The iterator starts positioned on the head and steps forward *before*
/// yielding, so the head itself is never produced: a list of `n` nodes yields
/// `n - 1` of them, beginning with the second.
///
/// Each call to [`List::iter`](crate::List::iter) re-reads the current head.
/// A clone continues independently from the position it was cloned at.

pub struct Iter<'a, T, A: Allocator = Global> {
  current: Option<&'a Node<T, A>>,
}

impl<'a, T, A: Allocator> Iter<'a, T, A> {
  #[inline(always)]
  pub(crate) fn new(head: Option<&'a Node<T, A>>) -> Self {
    Self { current: head }
  }
}

impl<'a, T, A: Allocator> Iterator for Iter<'a, T, A> {
  type Item = &'a Node<T, A>;

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    if let Some(node) = self.current {
      self.current = node.next();
    }

    self.current
  }
}

impl<'a, T, A: Allocator> FusedIterator for Iter<'a, T, A> { }

impl<'a, T, A: Allocator> Clone for Iter<'a, T, A> {
  fn clone(&self) -> Self {
    Self { current: self.current }
  }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Iter<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Iter")
      .field(&self.current.map(Node::value))
      .finish()
  }
}
