//! # Flexible List
//!
//! The `flex_list` crate provides a `#[no_std]` growable list, `FlexList`, that stores its
//! elements in one contiguous buffer much like `std::Vec`. I wrote `FlexList` for places where
//! a failed allocation or a bad index should come back as an error rather than a panic.
//!
//! Every operation that can allocate returns a `ListResult`, and every indexed access is
//! bounds checked against the current length and reports `ListError::IndexOutOfBounds`
//! instead of reading memory past the end.
//!
//! On top of the usual positional operations the list carries a handful of closure driven
//! algorithms: `for_each`, `find_first`, `find_all`, a stable insertion `sort_by`, and
//! `binary_search_by`.
//!
//! A new list starts with room for [`DEFAULT_CAPACITY`] elements and doubles its capacity
//! whenever it runs out of room.
//!
//! # Feature Flags
//! * `std_alloc` (default) - Enables `Global`, a `ListAllocator` implemented on top of the
//! standard allocator APIs, and makes it the default allocator for `FlexList`.
//!
//! * `alloc_api2` - Implements `ListAllocator` for every allocator implementing the
//! `allocator_api2::alloc::Allocator` trait.

#![no_std]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

mod flex_list;
pub mod types;

pub use flex_list::DEFAULT_CAPACITY;
pub use flex_list::FlexList;
