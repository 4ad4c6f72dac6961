//! A growable contiguous-storage vector with a toolbox of query and
//! transform operations built in: search, counting, set-like queries,
//! duplicate removal, sub-range extraction and shuffling.
//!
//! [`AlgoVec`] owns a single heap-allocated region. Elements live in
//! `[0, len)`; the slots in `[len, capacity)` are reserved, uninitialized
//! memory. Growth is amortized (`max(capacity / 2, 1)` extra slots per
//! implicit reallocation), and every capacity-changing operation documents
//! when it reallocates. Borrows of the element storage (slices, references
//! from indexing) are tied to the vector by lifetime, so the compiler
//! rejects holding one across a reallocating or shifting mutation.
//!
//! Allocation goes through [`allocator::Allocator`]; allocation failure
//! panics in the plain operations and is returned as
//! [`allocator::AllocError`] by the `try_*` ones.
//!
//! The `checks` feature keeps the internal bounds assertions on raw slot
//! access enabled in release builds.

mod algo;
pub mod allocator;
pub mod global;
mod raw;
mod util;
mod vec;

pub use util::DEFAULT_CAPACITY;
pub use vec::AlgoVec;

/// Creates an [`AlgoVec`] from a list of elements, or from an element and a
/// count (`algo_vec![elem; n]`).
#[macro_export]
macro_rules! algo_vec {
    () => {
        $crate::AlgoVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::AlgoVec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::AlgoVec::from_slice(&[$($x),+])
    };
}

#[test]
fn literal_macro() {
    let v = algo_vec![1, 2, 3];
    assert_eq!(v, [1, 2, 3]);

    let filled = algo_vec![0u8; 4];
    assert_eq!(filled, [0, 0, 0, 0]);

    let empty: AlgoVec<i32> = algo_vec![];
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), DEFAULT_CAPACITY);

    assert_eq!(algo_vec![1, 2, 3], AlgoVec::from([1, 2, 3]));
}
