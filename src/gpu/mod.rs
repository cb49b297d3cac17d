//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization and dynamic buffer
//! management.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
