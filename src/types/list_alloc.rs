use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The allocator used by `FlexList` for its backing buffer.
///
/// The rust allocator API is not stable yet, so this trait is a trimmed down
/// version of it holding just what a growable list needs. It follows the same
/// safety requirements:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// `FlexList` never asks for a zero sized layout.
pub unsafe trait ListAllocator {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// On failure it returns an `AllocError`, the list turns that into
    /// `ListError::AllocFailure`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the chunk of memory pointed at by `ptr`.
    ///
    /// The memory must have been allocated by this allocator and `layout`
    /// must match the layout it was allocated with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Grows the memory pointed at by `old_ptr` to `new_layout`.
    ///
    /// The bytes covered by `old_layout` are kept at the same offsets. If this
    /// fails `old_ptr` is still valid. If it succeeds `old_ptr` must no longer
    /// be used.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        unsafe { ptr.copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }
}
