//! GPU resource management.

pub mod context;

pub use context::GpuContext;
