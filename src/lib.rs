//! A growable array built from fixed-size slot buffers.
//!
//! [`DynamicArray`] keeps its elements packed at the front of a
//! [`FixedBuffer`] and swaps in a buffer of twice the size whenever an
//! insertion finds it full. Elements can be added or removed at either end;
//! the front operations shift every element and cost O(n).

mod dynamic_array;
mod fixed_buffer;

pub(crate) mod errors;

pub use dynamic_array::{DynamicArray, INITIAL_CAPACITY};
pub use fixed_buffer::FixedBuffer;
pub use errors::ArrayError;
