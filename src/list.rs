use core::fmt;
use core::iter;
use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;
use crate::Iter;
use crate::Node;
use crate::fail::Fail;
use crate::fail::boxed;
use crate::fail::unwrap;

/// A singly-linked list.
///
/// The list owns its head node, and every node owns the one after it. All
/// operations walk the chain from the head; there is no index or tail
/// pointer, so `count`, `last`, `append`, `remove_last` and `node_at` are
/// linear in the length of the chain.
///
/// Queries that can find nothing (an empty list, an index out of range)
/// return `None` rather than panicking.
///
/// Mutation requires `&mut List`. To share a list between threads, guard it
/// with a lock of the caller's choosing.

pub struct List<T, A: Allocator = Global> {
  head: Option<Box<Node<T, A>, A>>,
  allocator: A,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn append<T, A, E>(list: &mut List<T, A>, value: T) -> Result<(), E>
where
  A: Allocator + Clone,
  E: Fail,
{
  let node = boxed(Node::new(value), list.allocator.clone())?;
  list.append_node(node);
  Ok(())
}

fn map<T, U, A, E, F>(list: &List<T, A>, f: F) -> Result<List<U, A>, E>
where
  A: Allocator + Clone,
  E: Fail,
  F: FnMut(&T) -> U,
{
  let mut f = f;
  let mut result = List::new_in(list.allocator.clone());
  let mut tail = &mut result.head;

  for node in list.walk() {
    let node = boxed(Node::new(f(node.value())), list.allocator.clone())?;
    tail = &mut tail.insert(node).next;
  }

  Ok(result)
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T> {
  /// Creates an empty list backed by the global allocator.

  #[inline(always)]
  pub const fn new() -> Self {
    Self::new_in(Global)
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Creates an empty list whose nodes are allocated with `allocator`.

  #[inline(always)]
  pub const fn new_in(allocator: A) -> Self {
    Self { head: None, allocator }
  }

  /// A reference to the allocator backing the nodes.

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  // Every node in the chain, head included.

  fn walk(&self) -> impl Iterator<Item = &Node<T, A>> + '_ {
    iter::successors(self.head.as_deref(), |node| node.next())
  }

  /// The number of nodes, found by walking the whole chain.

  pub fn count(&self) -> usize {
    self.walk().count()
  }

  /// Returns `true` if the list has no head.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The head node, without traversal.

  #[inline(always)]
  pub fn first(&self) -> Option<&Node<T, A>> {
    self.head.as_deref()
  }

  /// The final node, the one with no successor.

  pub fn last(&self) -> Option<&Node<T, A>> {
    self.walk().last()
  }

  /// Links `node` after the current last node, or makes it the head of an
  /// empty list.
  ///
  /// Nodes already linked after `node` come along with it.

  pub fn append_node(&mut self, node: Box<Node<T, A>, A>) {
    let mut link = &mut self.head;

    while let Some(x) = link {
      link = &mut x.next;
    }

    *link = Some(node);
  }

  /// Detaches the last node and hands it to the caller.
  ///
  /// Returns `None` if the list is empty. Removing the only node leaves the
  /// list empty.

  pub fn remove_last(&mut self) -> Option<Box<Node<T, A>, A>> {
    let mut link = &mut self.head;

    // Stop on the link that owns the final node: either `head` or the `next`
    // of the node before it.
    //
    // NB: A `while let` that breaks on the final node would leave `link`
    // borrowed past the loop, so the test and the step are separate and the
    // `None` arm is never taken.

    while link.as_ref().is_some_and(|x| x.next.is_some()) {
      match link {
        Some(x) => link = &mut x.next,
        None => break,
      }
    }

    link.take()
  }

  /// The node at zero-based position `index`.
  ///
  /// Returns `None` if `index` is negative or not less than
  /// [`count`](Self::count).

  pub fn node_at(&self, index: isize) -> Option<&Node<T, A>> {
    let index = usize::try_from(index).ok()?;
    self.walk().nth(index)
  }

  /// Same as [`node_at`](Self::node_at).

  #[inline(always)]
  pub fn get(&self, index: isize) -> Option<&Node<T, A>> {
    self.node_at(index)
  }

  /// An iterator over the nodes *after* the head.
  ///
  /// See [`Iter`] for why the head is skipped.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T, A> {
    Iter::new(self.head.as_deref())
  }
}

impl<T, A: Allocator + Clone> List<T, A> {
  /// Appends `value` in a new node at the end of the list.
  ///
  /// # Panics
  ///
  /// Aborts via [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn append(&mut self, value: T) {
    unwrap(append(self, value))
  }

  /// Appends `value` in a new node at the end of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case the
  /// list is unchanged.

  pub fn try_append(&mut self, value: T) -> Result<(), AllocError> {
    append(self, value)
  }

  /// Builds a new list, in the same allocator, holding `f` applied to each
  /// value from head to tail. `self` is left untouched.
  ///
  /// # Panics
  ///
  /// Aborts on failure to allocate memory.

  pub fn map<U, F>(&self, f: F) -> List<U, A>
  where
    F: FnMut(&T) -> U
  {
    unwrap(map(self, f))
  }

  /// Builds a new list, in the same allocator, holding `f` applied to each
  /// value from head to tail. `self` is left untouched.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. Nodes built so far
  /// are released.

  pub fn try_map<U, F>(&self, f: F) -> Result<List<U, A>, AllocError>
  where
    F: FnMut(&T) -> U
  {
    map(self, f)
  }
}

impl<T, A: Allocator> Drop for List<T, A> {
  fn drop(&mut self) {
    // STACK SPACE:
    //
    // Each node's `next` is emptied before the node itself is dropped, so
    // dropping a long chain never recurses.

    let mut link = self.head.take();

    while let Some(mut node) = link {
      link = node.next.take();
    }
  }
}

impl<T> Default for List<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> FromIterator<T> for List<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<T, A: Allocator + Clone> Extend<T> for List<T, A> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    let allocator = self.allocator.clone();
    let mut link = &mut self.head;

    while let Some(x) = link {
      link = &mut x.next;
    }

    for value in iter {
      let node = unwrap(boxed(Node::new(value), allocator.clone()));
      link = &mut link.insert(node).next;
    }
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
  type Item = &'a Node<T, A>;
  type IntoIter = Iter<'a, T, A>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T: fmt::Display, A: Allocator> fmt::Display for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for node in self.walk() {
      write!(f, "[{}]", node)?;
    }

    Ok(())
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.walk().map(Node::value)).finish()
  }
}
