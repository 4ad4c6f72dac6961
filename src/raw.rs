use std::ptr::NonNull;

use crate::allocator::{AllocError, Allocator};
use crate::util::{self, bounds_check, is_zst, nnptr};

/// Unmanaged contiguous storage for `cap` slots of `T`.
///
/// The buffer knows nothing about which slots hold live values; tracking the
/// live prefix and dropping its elements is the owning vector's job. A
/// capacity of zero (or a zero-sized `T`) is represented by a dangling
/// pointer with no backing allocation.
pub(crate) struct RawBuffer<T> {
    data: NonNull<T>,
    cap: usize,
}

impl<T> RawBuffer<T> {
    #[inline(always)]
    fn should_be_dangling(cap: usize) -> bool {
        is_zst::<T>() || cap == 0
    }

    pub fn dangling() -> Self {
        let cap = if is_zst::<T>() { isize::MAX as usize } else { 0 };

        RawBuffer {
            data: NonNull::dangling(),
            cap,
        }
    }

    /// Allocates storage for `cap` slots. Does not allocate when `cap` is
    /// zero or `T` is zero-sized.
    pub fn try_allocate_in<A: Allocator>(cap: usize, allocator: &A) -> Result<Self, AllocError> {
        if Self::should_be_dangling(cap) {
            return Ok(Self::dangling());
        }

        let layout = util::array_layout::<T>(cap)?;
        let allocation = allocator.allocate(layout)?;

        Ok(RawBuffer {
            data: allocation.cast::<T>(),
            cap,
        })
    }

    /// Releases the allocation, leaving the buffer in its unallocated state.
    ///
    /// No-op (and safe to repeat) when there is no allocation. Live elements
    /// must have been dropped by the caller beforehand.
    ///
    /// # Safety
    ///
    /// The provided allocator must be the one this buffer was created with.
    pub unsafe fn deallocate_in<A: Allocator>(&mut self, allocator: &A) {
        if !Self::should_be_dangling(self.cap) {
            let layout = util::array_layout::<T>(self.cap).unwrap();
            allocator.deallocate(self.data.cast::<u8>(), layout);
        }

        *self = Self::dangling();
    }

    /// Moves the storage to an allocation of exactly `new_cap` slots,
    /// preserving slot contents byte-for-byte (moves in Rust are bitwise, so
    /// this is sound for any `T`). On failure the old allocation and
    /// capacity are left untouched.
    ///
    /// # Safety
    ///
    /// The provided allocator must be the one this buffer was created with,
    /// and slots at `new_cap` and beyond must no longer hold live values.
    pub unsafe fn try_reallocate_in<A: Allocator>(
        &mut self,
        new_cap: usize,
        allocator: &A,
    ) -> Result<(), AllocError> {
        let old_dangling = Self::should_be_dangling(self.cap);
        let new_dangling = Self::should_be_dangling(new_cap);

        if new_dangling {
            if !old_dangling {
                self.deallocate_in(allocator);
            }
            return Ok(());
        }

        if old_dangling {
            *self = Self::try_allocate_in(new_cap, allocator)?;
            return Ok(());
        }

        let old_layout = util::array_layout::<T>(self.cap)?;
        let new_layout = util::array_layout::<T>(new_cap)?;
        let old_alloc = self.data.cast::<u8>();

        let allocation = if new_layout.size() >= old_layout.size() {
            allocator.grow(old_alloc, old_layout, new_layout)
        } else {
            allocator.shrink(old_alloc, old_layout, new_layout)
        }?;

        self.data = allocation.cast::<T>();
        self.cap = new_cap;

        Ok(())
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub fn items_ptr(&self) -> NonNull<T> {
        self.data
    }

    #[inline(always)]
    pub unsafe fn item_ptr(&self, index: usize) -> NonNull<T> {
        bounds_check!(index < self.cap, "slot {index} out of capacity {}", self.cap);
        nnptr::add(self.data, index)
    }

    #[inline(always)]
    pub unsafe fn write_item(&mut self, index: usize, val: T) {
        let dst = self.item_ptr(index);
        nnptr::write(dst, val);
    }

    #[inline(always)]
    pub unsafe fn read_item(&self, index: usize) -> T {
        let src = self.item_ptr(index);
        nnptr::read(src)
    }

    #[inline]
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        core::slice::from_raw_parts(self.data.as_ptr(), len)
    }

    #[inline]
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        core::slice::from_raw_parts_mut(self.data.as_ptr(), len)
    }
}

#[test]
fn allocate_write_read() {
    let allocator = crate::global::Global;
    let mut buf = RawBuffer::<u32>::try_allocate_in(4, &allocator).unwrap();
    assert_eq!(buf.capacity(), 4);

    unsafe {
        for i in 0..4 {
            buf.write_item(i, i as u32 * 10);
        }
        assert_eq!(buf.as_slice(4), &[0, 10, 20, 30]);
        assert_eq!(buf.read_item(2), 20);

        buf.deallocate_in(&allocator);
    }
    assert_eq!(buf.capacity(), 0);
}

#[test]
fn reallocate_preserves_contents() {
    let allocator = crate::global::Global;
    let mut buf = RawBuffer::<u64>::try_allocate_in(2, &allocator).unwrap();

    unsafe {
        buf.write_item(0, 7);
        buf.write_item(1, 9);

        buf.try_reallocate_in(16, &allocator).unwrap();
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.as_slice(2), &[7, 9]);

        buf.try_reallocate_in(2, &allocator).unwrap();
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.as_slice(2), &[7, 9]);

        buf.deallocate_in(&allocator);
    }
}

#[test]
fn dangling_transitions() {
    let allocator = crate::global::Global;
    let mut buf = RawBuffer::<u8>::dangling();
    assert_eq!(buf.capacity(), 0);

    unsafe {
        // Unallocated -> allocated.
        buf.try_reallocate_in(8, &allocator).unwrap();
        assert_eq!(buf.capacity(), 8);

        // Allocated -> unallocated.
        buf.try_reallocate_in(0, &allocator).unwrap();
        assert_eq!(buf.capacity(), 0);

        // Deallocate is idempotent.
        buf.deallocate_in(&allocator);
        buf.deallocate_in(&allocator);
    }
}

#[test]
fn zst_storage_is_dangling() {
    let allocator = crate::global::Global;
    let mut buf = RawBuffer::<()>::try_allocate_in(100, &allocator).unwrap();
    assert_eq!(buf.capacity(), isize::MAX as usize);

    unsafe {
        buf.write_item(0, ());
        buf.deallocate_in(&allocator);
    }
}
