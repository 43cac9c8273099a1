use std::{alloc::{self, Layout}, ptr::NonNull};

use crate::errors::AllocErr;


#[inline]
pub(crate) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::Layout) => panic!("invalid parameters to Layout::from_size_align"),
        Err(AllocErr::Overflow) => panic!("capacity overflow"),
        Err(AllocErr::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

/// Allocates an uninitialized block of `slots` values of `T`. Zero-sized
/// layouts never reach the allocator and come back dangling.
#[inline]
pub(super) fn allocate<T>(slots: usize) -> Result<NonNull<T>, AllocErr> {
    let layout = Layout::array::<T>(slots).map_err(AllocErr::layout)?;
    if layout.size() == 0 { return Ok(NonNull::dangling()) }

    NonNull::new(unsafe { alloc::alloc(layout) })
        .ok_or(AllocErr::alloc(layout))
        .map(|ptr| ptr.cast())
}

/// # Safety
/// `ptr` must come from `allocate::<T>(slots)` with the same `slots`.
#[inline]
pub(super) unsafe fn deallocate<T>(ptr: NonNull<T>, slots: usize) {
    match Layout::array::<T>(slots) {
        Ok(layout) if layout.size() > 0 => unsafe {
            alloc::dealloc(ptr.as_ptr().cast(), layout)
        },
        _ => { }
    }
}
