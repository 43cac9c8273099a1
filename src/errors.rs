use std::alloc::{Layout, LayoutError};

use thiserror::Error;


/// Failure of a bounds-checked [`DynamicArray`](crate::DynamicArray) operation.
/// The array is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("cannot remove from an empty array")]
    Underflow,
}

#[derive(Debug, Clone, Error)]
pub enum AllocErr {
    #[error("capacity overflow")]
    Overflow,
    #[error("invalid slot layout")]
    Layout,
    #[error("allocation failed for {layout:?}")]
    Alloc { layout: Layout }
}

impl AllocErr {
    #[inline]
    pub(crate) const fn layout(_err: LayoutError) -> Self { Self::Layout }

    #[inline]
    pub(crate) const fn alloc(layout: Layout) -> Self { Self::Alloc { layout } }
}
