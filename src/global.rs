pub use allocator_api2::alloc::Global;
