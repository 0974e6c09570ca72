use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::ptr;
use core::slice;

use super::raw::RawBuf;
use crate::types::ListAllocator;
use crate::types::ListError;
use crate::types::ListResult;

#[cfg(feature = "std_alloc")]
use crate::types::Global;

/// Number of element slots a list starts with when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 10;

/// A contiguous growable list of `T` that reports failures as errors.
///
/// Elements in `0..len()` are live, the remaining slots up to `capacity()`
/// are allocated but unused. When a push or insert finds the list full the
/// capacity is at least doubled.
///
/// All references handed out borrow the list, so none of them can outlive a
/// call that may reallocate the buffer.
#[cfg(feature = "std_alloc")]
pub struct FlexList<T, A: ListAllocator = Global> {
    buf: RawBuf<A>,
    len: usize,
    _ph: PhantomData<T>,
}

/// A contiguous growable list of `T` that reports failures as errors.
///
/// Elements in `0..len()` are live, the remaining slots up to `capacity()`
/// are allocated but unused. When a push or insert finds the list full the
/// capacity is at least doubled.
///
/// All references handed out borrow the list, so none of them can outlive a
/// call that may reallocate the buffer.
#[cfg(not(feature = "std_alloc"))]
pub struct FlexList<T, A: ListAllocator> {
    buf: RawBuf<A>,
    len: usize,
    _ph: PhantomData<T>,
}

#[cfg(feature = "std_alloc")]
impl<T> FlexList<T, Global> {
    /// Creates an empty list using the global allocator with room for
    /// `DEFAULT_CAPACITY` elements.
    pub fn new() -> ListResult<Self> {
        return Self::new_in(Global);
    }

    /// Creates an empty list using the global allocator with room for
    /// `capacity` elements.
    pub fn with_capacity(capacity: usize) -> ListResult<Self> {
        return Self::with_capacity_in(Global, capacity);
    }
}

impl<T, A: ListAllocator> FlexList<T, A> {
    pub(super) const LAYOUT: Layout = Layout::new::<T>();

    /// Creates an empty list with room for `DEFAULT_CAPACITY` elements.
    pub fn new_in(alloc: A) -> ListResult<Self> {
        return Self::with_capacity_in(alloc, DEFAULT_CAPACITY);
    }

    /// Creates an empty list with room for `capacity` elements.
    ///
    /// Fails with `ListError::AllocFailure` if the buffer cannot be allocated.
    pub fn with_capacity_in(alloc: A, capacity: usize) -> ListResult<Self> {
        let buf = RawBuf::with_capacity_in(alloc, capacity, Self::LAYOUT)?;
        return Ok(Self {
            buf: buf,
            len: 0,
            _ph: PhantomData,
        });
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Number of element slots currently allocated.
    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.buf.capacity();
    }

    #[inline]
    pub const fn allocator(&self) -> &A {
        return self.buf.allocator();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return unsafe { slice::from_raw_parts(self.as_ptr(), self.len) };
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        return unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) };
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    #[inline]
    pub(super) const fn as_ptr(&self) -> *const T {
        return self.buf.get_ptr();
    }

    #[inline]
    pub(super) const fn as_mut_ptr(&mut self) -> *mut T {
        return self.buf.get_ptr();
    }

    #[inline]
    fn check_index(&self, index: usize) -> ListResult<()> {
        if index >= self.len {
            log::debug!("rejected index {} for list of length {}", index, self.len);
            return Err(ListError::out_of_bounds(index, self.len));
        }
        return Ok(());
    }

    /// Reallocates the buffer to exactly `new_capacity` slots.
    ///
    /// Elements keep their positions. A capacity at or below the current one
    /// leaves the list untouched, the buffer is never shrunk.
    pub fn grow_to(&mut self, new_capacity: usize) -> ListResult<()> {
        return self.buf.grow_to(new_capacity, Self::LAYOUT);
    }

    /// Makes sure there is room for `additional` more elements.
    ///
    /// When the list has to grow the new capacity is the larger of twice the
    /// current capacity and what is actually required.
    pub fn reserve(&mut self, additional: usize) -> ListResult<()> {
        let Some(required) = self.len.checked_add(additional) else {
            return Err(ListError::alloc_failure(usize::MAX));
        };
        let cap = self.capacity();
        if required <= cap {
            return Ok(());
        }
        let doubled = cap.saturating_mul(2);
        return self.grow_to(doubled.max(required));
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> ListResult<&T> {
        self.check_index(index)?;
        return Ok(unsafe { &*self.as_ptr().add(index) });
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> ListResult<&mut T> {
        self.check_index(index)?;
        return Ok(unsafe { &mut *self.as_mut_ptr().add(index) });
    }

    /// Overwrites the element at `index`, dropping the old one.
    pub fn set(&mut self, index: usize, value: T) -> ListResult<()> {
        let slot = self.get_mut(index)?;
        *slot = value;
        return Ok(());
    }

    /// Appends `item` to the end of the list.
    pub fn push(&mut self, item: T) -> ListResult<()> {
        self.reserve(1)?;
        let len = self.len;
        unsafe { ptr::write(self.as_mut_ptr().add(len), item) };
        self.len = len + 1;
        return Ok(());
    }

    /// Removes the last element and returns it, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        return Some(unsafe { ptr::read(self.as_ptr().add(self.len)) });
    }

    /// Inserts `item` at `index` shifting everything after it one slot right.
    ///
    /// `index` may equal `len()`, which appends.
    pub fn insert_at(&mut self, index: usize, item: T) -> ListResult<()> {
        let len = self.len;
        if index > len {
            log::debug!("rejected insert at {} for list of length {}", index, len);
            return Err(ListError::out_of_bounds(index, len));
        }
        self.reserve(1)?;

        unsafe {
            let loc = self.as_mut_ptr().add(index);
            ptr::copy(loc, loc.add(1), len - index);
            ptr::write(loc, item);
        }
        self.len = len + 1;
        return Ok(());
    }

    /// Removes and returns the element at `index`, shifting everything after it
    /// one slot left. The capacity is kept.
    pub fn remove_at(&mut self, index: usize) -> ListResult<T> {
        self.check_index(index)?;
        let len = self.len;
        unsafe {
            let loc = self.as_mut_ptr().add(index);
            let ret = ptr::read(loc);
            ptr::copy(loc.add(1), loc, len - index - 1);
            self.len = len - 1;
            return Ok(ret);
        }
    }

    /// Drops every element. The buffer is kept for reuse.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len);
        // Set the length first in case a destructor panics.
        self.len = 0;
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T: Clone, A: ListAllocator> FlexList<T, A> {
    /// Appends clones of `value` until the list is as long as its capacity was
    /// when the call started.
    ///
    /// The fill count is fixed before the first append, so this never
    /// reallocates.
    pub fn fill_to_capacity(&mut self, value: &T) {
        let target = self.capacity();
        while self.len < target {
            let len = self.len;
            unsafe { ptr::write(self.as_mut_ptr().add(len), value.clone()) };
            self.len = len + 1;
        }
    }
}

impl<T: Clone, A: ListAllocator + Clone> FlexList<T, A> {
    /// Deep copies the list into a new buffer with the same capacity.
    ///
    /// The copy shares no memory with `self`.
    pub fn try_clone(&self) -> ListResult<Self> {
        let mut copy = Self::with_capacity_in(self.allocator().clone(), self.capacity())?;
        for item in self.iter() {
            let len = copy.len;
            unsafe { ptr::write(copy.as_mut_ptr().add(len), item.clone()) };
            copy.len = len + 1;
        }
        return Ok(copy);
    }
}

impl<T, A: ListAllocator> Drop for FlexList<T, A> {
    fn drop(&mut self) {
        self.clear();
        unsafe { self.buf.release(Self::LAYOUT) };
    }
}

impl<T: fmt::Debug, A: ListAllocator> fmt::Debug for FlexList<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T: PartialEq, A: ListAllocator, B: ListAllocator> PartialEq<FlexList<T, B>> for FlexList<T, A> {
    fn eq(&self, other: &FlexList<T, B>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq, A: ListAllocator> Eq for FlexList<T, A> {}

impl<T: PartialEq, A: ListAllocator> PartialEq<[T]> for FlexList<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        return self.as_slice() == other;
    }
}

impl<T: PartialEq, A: ListAllocator, const N: usize> PartialEq<[T; N]> for FlexList<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<'a, T, A: ListAllocator> IntoIterator for &'a FlexList<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

unsafe impl<T: Send, A: ListAllocator + Send> Send for FlexList<T, A> {}
unsafe impl<T: Sync, A: ListAllocator + Sync> Sync for FlexList<T, A> {}
