#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod fail;
mod iter;
mod list;
mod node;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub use allocator_api2::alloc::AllocError;
pub use allocator_api2::alloc::Allocator;
pub use allocator_api2::alloc::Global;
pub use allocator_api2::boxed::Box;
pub use iter::Iter;
pub use list::List;
pub use node::Node;
