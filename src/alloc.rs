//! Aligned raw storage for [`DynVector`](crate::DynVector).
//!
//! A thin single-owner buffer allocated at [`ALIGNMENT`](crate::ALIGNMENT)
//! (or the element's natural alignment, whichever is larger). Freshly
//! allocated memory is always zeroed; growth copies the old contents into a
//! larger zeroed allocation, so bytes beyond the old capacity are zero.

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::ptr::NonNull;

use crate::ALIGNMENT;

pub(crate) struct AlignedBuf<T: Copy> {
    ptr: NonNull<T>,
    cap: usize,
}

// The buffer is a plain owned allocation; sharing it across threads is as
// safe as sharing the element type.
unsafe impl<T: Copy + Send> Send for AlignedBuf<T> {}
unsafe impl<T: Copy + Sync> Sync for AlignedBuf<T> {}

impl<T: Copy> AlignedBuf<T> {
    /// Alignment actually used for allocations of `T`.
    pub(crate) const fn alignment() -> usize {
        let natural = std::mem::align_of::<T>();
        if ALIGNMENT > natural {
            ALIGNMENT
        } else {
            natural
        }
    }

    fn layout(cap: usize) -> Layout {
        let Some(bytes) = cap.checked_mul(std::mem::size_of::<T>()) else {
            panic!("allocation size overflow for {cap} elements");
        };
        match Layout::from_size_align(bytes, Self::alignment()) {
            Ok(layout) => layout,
            Err(_) => panic!("allocation size overflow for {cap} elements"),
        }
    }

    /// Allocate a zeroed buffer for `cap` elements.
    pub(crate) fn zeroed(cap: usize) -> Self {
        if cap == 0 || std::mem::size_of::<T>() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap,
            };
        }
        let layout = Self::layout(cap);
        let raw = unsafe { alloc_zeroed(layout) } as *mut T;
        let Some(ptr) = NonNull::new(raw) else {
            handle_alloc_error(layout);
        };
        Self { ptr, cap }
    }

    /// Grow to `new_cap` elements, preserving contents. Memory beyond the old
    /// capacity comes back zeroed.
    pub(crate) fn grow_zeroed(&mut self, new_cap: usize) {
        debug_assert!(new_cap > self.cap);
        let mut grown = Self::zeroed(new_cap);
        if self.cap > 0 && std::mem::size_of::<T>() > 0 {
            unsafe {
                std::ptr::copy_nonoverlapping(self.ptr.as_ptr(), grown.ptr.as_ptr(), self.cap);
            }
        }
        std::mem::swap(self, &mut grown);
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T: Copy> Drop for AlignedBuf<T> {
    fn drop(&mut self) {
        if self.cap > 0 && std::mem::size_of::<T>() > 0 {
            unsafe {
                dealloc(self.ptr.as_ptr() as *mut u8, Self::layout(self.cap));
            }
        }
    }
}
