
use std::{fmt, ops::{Index, IndexMut}};
use log::trace;
use crate::{
    errors::{AllocErr, ArrayError},
    fixed_buffer::{infallible, FixedBuffer},
};

/// Slot count of a freshly created [`DynamicArray`]. Every later capacity is
/// this value times a power of two.
pub const INITIAL_CAPACITY: usize = 8;


#[inline(always)]
fn live<V>(slot: Option<V>) -> V {
    match slot {
        Some(value) => value,
        None => unreachable!("slot below len held no value"),
    }
}

/// A growable array on top of a [`FixedBuffer`].
///
/// Live elements occupy slots `[0, len)` in order. Adding an element to a
/// full array first moves everything into a buffer of twice the capacity,
/// which keeps `push` amortized O(1). Capacity never shrinks.
pub struct DynamicArray<T> {
    buffer: FixedBuffer<T>,
    capacity: usize,
    len: usize,
}

impl <T> Default for DynamicArray<T> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl <T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut buffer = FixedBuffer::new(self.capacity);
        (0..self.len).for_each(|i| buffer.set(i, self[i].clone()));

        Self { buffer, capacity: self.capacity, len: self.len }
    }
}

impl <T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && (0..self.len).all(|i| self[i] == other[i])
    }
}

impl <T: Eq> Eq for DynamicArray<T> {}

#[cfg(not(tarpaulin_include))]
impl <T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries((0..self.len).map(|i| &self[i])).finish()
    }
}

impl <T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.len, "Index out of bounds");
        live(self.buffer.get(index))
    }
}

impl <T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < self.len, "Index out of bounds");
        live(self.buffer.get_mut(index))
    }
}

impl <T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(arr: [T; N]) -> Self {
        let mut array = Self::new();
        arr.into_iter().for_each(|v| array.push(v));
        array
    }
}

impl <T> DynamicArray<T> {

    pub fn new() -> Self {
        Self {
            buffer: FixedBuffer::new(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            len: 0,
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize { self.len }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        Ok(live(self.buffer.get(index)))
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        Ok(live(self.buffer.get_mut(index)))
    }

    /// Overwrites the element at `index`. Only live positions can be written;
    /// anything at or past `len` is rejected and `value` is dropped.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.buffer.set(index, value);
        Ok(())
    }

    /// Appends to the back, growing first if the buffer is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len >= self.capacity { self.grow() }
        self.buffer.set(self.len, value);
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 { return Err(ArrayError::Underflow) }

        let last = self.buffer.take(self.len - 1);
        self.len -= 1;
        Ok(live(last))
    }

    /// Removes the front element and moves every remaining element down one
    /// slot. O(n).
    pub fn shift(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 { return Err(ArrayError::Underflow) }

        let first = self.buffer.take(0);
        for i in 0..self.len - 1 {
            let next = self.buffer.take(i + 1);
            self.buffer.replace(i, next);
        }
        self.len -= 1;
        Ok(live(first))
    }

    /// Inserts at the front, moving every element up one slot. O(n).
    pub fn unshift(&mut self, value: T) {
        if self.len >= self.capacity { self.grow() }

        // Walk downward so each slot is read before it is overwritten
        for i in (1..=self.len).rev() {
            let prev = self.buffer.take(i - 1);
            self.buffer.replace(i, prev);
        }
        self.buffer.set(0, value);
        self.len += 1;
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        match index < self.len {
            true => Ok(()),
            false => Err(ArrayError::IndexOutOfBounds { index, len: self.len }),
        }
    }

    #[cold]
    fn grow(&mut self) {
        infallible(self.try_grow())
    }

    fn try_grow(&mut self) -> Result<(), AllocErr> {
        debug_assert!(self.len == self.capacity);
        debug_assert!(self.buffer.len() == self.capacity);

        let new_cap = self.capacity.checked_mul(2).ok_or(AllocErr::Overflow)?;
        let mut buffer = FixedBuffer::try_new(new_cap)?;

        for i in 0..self.capacity {
            buffer.replace(i, self.buffer.take(i));
        }
        trace!("grew dynamic array from {} to {} slots (len {})", self.capacity, new_cap, self.len);

        self.buffer = buffer;
        self.capacity = new_cap;
        Ok(())
    }
}
