use core::fmt;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;

/// A single element of a [`List`](crate::List): an immutable value and a link
/// to the node after it.
///
/// A node is always uniquely owned, either by the list (as its head), by the
/// node before it, or by whoever received it from
/// [`remove_last`](crate::List::remove_last). The link is read-only outside
/// of the list.

pub struct Node<T, A: Allocator = Global> {
  value: T,
  pub(crate) next: Option<Box<Node<T, A>, A>>,
}

impl<T, A: Allocator> Node<T, A> {
  /// Creates a node holding `value` with no successor.

  #[inline(always)]
  pub const fn new(value: T) -> Self {
    Self { value, next: None }
  }

  /// The value held by this node.

  #[inline(always)]
  pub fn value(&self) -> &T {
    &self.value
  }

  /// The node linked after this one, if any.

  #[inline(always)]
  pub fn next(&self) -> Option<&Self> {
    self.next.as_deref()
  }

  /// Moves a boxed node, such as one returned by
  /// [`remove_last`](crate::List::remove_last), out of its allocation.

  #[inline(always)]
  pub fn unbox(this: Box<Self, A>) -> Self {
    Box::into_inner(this)
  }

  /// Consumes the node, returning its value.

  #[inline(always)]
  pub fn into_value(self) -> T {
    self.value
  }
}

impl<T: fmt::Display, A: Allocator> fmt::Display for Node<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.value, f)
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Node<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Node")
      .field("value", &self.value)
      .field("linked", &self.next.is_some())
      .finish()
  }
}
