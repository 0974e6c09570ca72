use core::alloc::Layout;
use core::ptr;
use core::ptr::NonNull;

use crate::types::ListAllocator;
use crate::types::ListError;
use crate::types::ListResult;

const fn layout_array(layout: Layout, length: usize) -> ListResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(size) = length.checked_mul(lay.size()) else {
        return Err(ListError::alloc_failure(length));
    };
    // Safety: rust is pretty adamant about sizes not being over isize::MAX
    if size > (isize::MAX as usize) {
        return Err(ListError::alloc_failure(length));
    }
    let Ok(lay) = Layout::from_size_align(size, layout.align()) else {
        return Err(ListError::alloc_failure(length));
    };
    return Ok(lay);
}

/// The backing buffer of a `FlexList`.
///
/// It only tracks the allocation, it has no idea which slots hold live
/// elements. The element layout is passed into every call rather than
/// stored.
pub(crate) struct RawBuf<A: ListAllocator> {
    ptr:      NonNull<u8>,
    capacity: usize,
    alloc:    A,
}

impl<A: ListAllocator> RawBuf<A> {
    const fn dangling(align: usize) -> NonNull<u8> {
        // Alignment is never zero.
        return unsafe { NonNull::new_unchecked(ptr::without_provenance_mut(align)) };
    }

    pub(crate) fn with_capacity_in(alloc: A, capacity: usize, layout: Layout) -> ListResult<Self> {
        let mut buf = Self {
            ptr:      Self::dangling(layout.align()),
            capacity: 0,
            alloc:    alloc,
        };
        buf.grow_to(capacity, layout)?;
        return Ok(buf);
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        return &self.alloc;
    }

    #[inline]
    pub(crate) const fn get_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr().cast();
    }

    /// Reallocates the buffer to hold exactly `new_capacity` elements.
    ///
    /// The bytes of the existing slots keep their offsets. Asking for a capacity
    /// no larger than the current one does nothing.
    pub(crate) fn grow_to(&mut self, new_capacity: usize, layout: Layout) -> ListResult<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }

        let new_layout = layout_array(layout, new_capacity)?;
        // Zero sized elements never touch the allocator.
        if new_layout.size() == 0 {
            self.capacity = new_capacity;
            return Ok(());
        }

        let grown = if self.capacity == 0 {
            self.alloc.allocate(new_layout)
        } else {
            let old_layout = layout_array(layout, self.capacity)?;
            unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) }
        };

        let Ok(ptr) = grown else {
            log::debug!(
                "failed to grow list buffer from {} to {} slots ({} bytes)",
                self.capacity,
                new_capacity,
                new_layout.size()
            );
            return Err(ListError::alloc_failure(new_capacity));
        };

        log::trace!("grew list buffer from {} to {} slots", self.capacity, new_capacity);
        self.ptr = ptr.cast();
        self.capacity = new_capacity;
        return Ok(());
    }

    /// Gives the buffer back to the allocator.
    ///
    /// Must be called at most once, the element destructors have to be run before.
    pub(crate) unsafe fn release(&mut self, layout: Layout) {
        let Ok(lay) = layout_array(layout, self.capacity) else {
            return;
        };
        if lay.size() == 0 {
            return;
        }
        unsafe { self.alloc.deallocate(self.ptr, lay) };
        self.ptr = Self::dangling(layout.align());
        self.capacity = 0;
    }
}
