use core::cmp::Ordering;
use core::mem::ManuallyDrop;
use core::ptr;

use super::FlexList;
use crate::types::ListAllocator;
use crate::types::ListResult;

/// Owns the hole left in the list while an element is being moved down by the
/// insertion sort. Dropping it writes the element back, even on unwind.
struct InsertionHole<T> {
    src:  *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        unsafe { ptr::copy_nonoverlapping(self.src, self.dest, 1) };
    }
}

impl<T, A: ListAllocator> FlexList<T, A> {
    /// Calls `visitor` with every element and its index, in order.
    ///
    /// The visitor may modify elements in place. It cannot resize the list
    /// since the list is mutably borrowed for the whole traversal.
    pub fn for_each<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut T, usize),
    {
        for (idx, item) in self.as_mut_slice().iter_mut().enumerate() {
            visitor(item, idx);
        }
    }

    /// Returns the index of the first element for which `equals(element, target)`
    /// is true.
    pub fn find_first<U, F>(&self, target: &U, mut equals: F) -> Option<usize>
    where
        U: ?Sized,
        F: FnMut(&T, &U) -> bool,
    {
        return self.iter().position(|item| equals(item, target));
    }

    /// Sorts the list in place, ascending according to `compare`.
    ///
    /// This is an insertion sort: stable, `O(n^2)` comparisons, and no extra
    /// memory beyond the element being moved. If `compare` is not a total order
    /// the resulting order is unspecified, but every element is still present
    /// exactly once.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len();
        let base = self.as_mut_ptr();
        for i in 1..len {
            unsafe { insert_tail(base, i, &mut compare) };
        }
    }

    /// Searches a list sorted ascending by `compare` for `target`.
    ///
    /// `compare(element, target)` must return how the element orders relative to
    /// the target. When several elements match any one of their indices may be
    /// returned. The list is not checked for sortedness, on an unsorted list the
    /// result is unspecified.
    pub fn binary_search_by<U, F>(&self, target: &U, mut compare: F) -> Option<usize>
    where
        U: ?Sized,
        F: FnMut(&T, &U) -> Ordering,
    {
        let items = self.as_slice();
        let mut left = 0;
        let mut right = items.len();

        while left < right {
            let mid = left + (right - left) / 2;
            match compare(&items[mid], target) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid,
            }
        }
        return None;
    }
}

impl<T, A: ListAllocator + Clone> FlexList<T, A> {
    /// Collects the index of every element for which `equals(element, target)`
    /// is true, in ascending order.
    ///
    /// The indices live in a new list using a clone of this list's allocator.
    pub fn find_all<U, F>(&self, target: &U, mut equals: F) -> ListResult<FlexList<usize, A>>
    where
        U: ?Sized,
        F: FnMut(&T, &U) -> bool,
    {
        let mut found = FlexList::new_in(self.allocator().clone())?;
        for (idx, item) in self.iter().enumerate() {
            if equals(item, target) {
                found.push(idx)?;
            }
        }
        return Ok(found);
    }
}

impl<T: Ord, A: ListAllocator> FlexList<T, A> {
    /// Sorts the list ascending by `Ord`, see `sort_by`.
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }

    /// Binary search by `Ord`, see `binary_search_by`.
    pub fn binary_search(&self, target: &T) -> Option<usize> {
        return self.binary_search_by(target, T::cmp);
    }
}

/// Moves the element at `tail` left until its predecessor is not greater than it.
///
/// Elements `0..tail` must already be sorted. Only strictly greater predecessors
/// are shifted, which keeps equal elements in their original order.
unsafe fn insert_tail<T, F>(base: *mut T, tail: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unsafe {
        let tail_ptr = base.add(tail);
        let mut prev = tail_ptr.sub(1);
        if compare(&*prev, &*tail_ptr) != Ordering::Greater {
            return;
        }

        let key = ManuallyDrop::new(ptr::read(tail_ptr));
        let mut hole = InsertionHole {
            src:  &*key,
            dest: prev,
        };
        ptr::copy_nonoverlapping(prev, tail_ptr, 1);

        let mut pos = tail - 1;
        while pos > 0 {
            prev = base.add(pos - 1);
            if compare(&*prev, &*key) != Ordering::Greater {
                break;
            }
            ptr::copy_nonoverlapping(prev, base.add(pos), 1);
            hole.dest = prev;
            pos -= 1;
        }
        // `hole` writes the key into its final slot when it drops here.
    }
}
