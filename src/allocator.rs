pub use allocator_api2::alloc::{AllocError, Allocator};
pub use core::alloc::Layout;
