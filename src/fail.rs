use core::alloc::Layout;
use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use allocator_api2::boxed::Box;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub(crate) enum Panicked { }

pub(crate) trait Fail: Sized {
  fn fail<T>(layout: Layout) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
pub(crate) fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

/// Moves `value` into a fresh allocation from `allocator`, reporting failure
/// through `E`.

#[inline(always)]
pub(crate) fn boxed<T, A, E>(value: T, allocator: A) -> Result<Box<T, A>, E>
where
  A: Allocator,
  E: Fail,
{
  match Box::try_new_in(value, allocator) {
    Ok(x) => Ok(x),
    Err(_) => E::fail(Layout::new::<T>()),
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(layout: Layout) -> Result<T, Self> {
    alloc::alloc::handle_alloc_error(layout)
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Layout) -> Result<T, Self> {
    Err(AllocError)
  }
}
