//
// Copyright (c) 2025 Nathan Fiedler
//

//! An implementation of space-optimal resizable arrays as described in the
//! paper "Optimal resizable arrays" by Robert E. Tarjan and Uri Zwick,
//! published in 2023.
//!
//! * https://doi.org/10.48550/arXiv.2211.11009
//!
//! # Memory Usage
//!
//! An empty resizable array is under 100 bytes in size, and while holding
//! elements it will have a space overhead on the order of O(N^1/r), where
//! `r` is a compile-time parameter with a default of 3. Compare this to the
//! standard `Vec` whose doubling growth policy can leave nearly N unused
//! slots allocated. As elements are added the array will grow by allocating
//! additional data blocks, occasionally merging small blocks into larger
//! ones. Likewise, as elements are removed from the end of the array, data
//! blocks are split and deallocated so the overhead bound continues to hold
//! while shrinking.
//!
//! # Performance
//!
//! Append and remove are `O(r)` amortized. The lookup operation walks the
//! `r - 1` levels of data blocks and as such the overall performance will
//! be somewhat worse than `Vec`. The advantage is the substantially reduced
//! memory overhead.
//!
//! # Safety
//!
//! Because this data structure is allocating memory, copying bytes using
//! raw pointers, and de-allocating memory as needed, there are many
//! `unsafe` blocks throughout the code.

mod array;
mod block;

pub use array::{ArrayIntoIter, ArrayIter, ResizableArray};

use thiserror::Error;

/// Errors reported by the checked operations of [`ResizableArray`].
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The given index was at or beyond the end of the array.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds {
        /// the offending index
        index: usize,
        /// length of the array at the time of the call
        len: usize,
    },
    /// The array held no elements to remove.
    #[error("cannot pop from an empty array")]
    Empty,
}
