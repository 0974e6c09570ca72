//! Contains the allocator trait and error types used by `FlexList`. The most important being
//! the `ListAllocator` trait, and the `ListError` type.
//!
//! If built with the `std_alloc` feature, a wrapper called `Global` is also provided.
//!
//! If built with the `alloc_api2` feature, `ListAllocator` is implemented for every
//! type implementing `allocator_api2::alloc::Allocator`.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod errors;
mod list_alloc;
#[cfg(feature = "std_alloc")]
mod std_alloc;

pub use errors::*;
pub use list_alloc::ListAllocator;
#[cfg(feature = "std_alloc")]
pub use std_alloc::Global;
