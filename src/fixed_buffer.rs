
mod allocation;

use std::{fmt, marker::PhantomData, mem, ptr::{self, NonNull}, slice};
use crate::errors::AllocErr;
use allocation::{allocate, deallocate};

pub(crate) use allocation::infallible;


/// A heap block of exactly `len` slots, each holding either a value or
/// nothing. The slot count is fixed when the buffer is created.
pub struct FixedBuffer<T> {
    ptr: NonNull<Option<T>>,
    slots: usize,
    _marker: PhantomData<Option<T>>,
}

unsafe impl<T: Send> Send for FixedBuffer<T> {}
unsafe impl<T: Sync> Sync for FixedBuffer<T> {}

impl <T> Drop for FixedBuffer<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_slots_mut());
            deallocate(self.ptr, self.slots);
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl <T: fmt::Debug> fmt::Debug for FixedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slots()).finish()
    }
}

impl <T> FixedBuffer<T> {

    /// Creates a buffer of `slots` empty slots, aborting if the allocator
    /// cannot provide them.
    #[inline]
    pub fn new(slots: usize) -> Self {
        infallible(Self::try_new(slots))
    }

    pub(crate) fn try_new(slots: usize) -> Result<Self, AllocErr> {
        let ptr = allocate::<Option<T>>(slots)?;
        for i in 0..slots {
            unsafe { ptr.add(i).write(None) }
        }
        Ok(Self { ptr, slots, _marker: PhantomData })
    }

    #[inline(always)]
    pub const fn len(&self) -> usize { self.slots }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        assert!(index < self.slots, "Index out of bounds");
        self.as_slots()[index].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        assert!(index < self.slots, "Index out of bounds");
        self.as_slots_mut()[index].as_mut()
    }

    #[inline]
    pub fn is_vacant(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    /// Overwrites a slot, dropping whatever it held.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        self.replace(index, Some(value));
    }

    /// Moves the value out of a slot, leaving it empty.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.replace(index, None)
    }

    #[inline]
    pub fn replace(&mut self, index: usize, value: Option<T>) -> Option<T> {
        assert!(index < self.slots, "Index out of bounds");
        mem::replace(&mut self.as_slots_mut()[index], value)
    }

    #[inline]
    fn as_slots(&self) -> &[Option<T>] {
        // Every slot is written with `None` on creation, so the whole block is initialized
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.slots) }
    }

    #[inline]
    fn as_slots_mut(&mut self) -> &mut [Option<T>] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.slots) }
    }
}
