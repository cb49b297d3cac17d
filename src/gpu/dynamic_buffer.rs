//! Growable vertex, index, and instance buffers.
//!
//! Primitive counts change whenever a display toggle flips or the
//! representation switches, so scene data is uploaded through buffers that
//! reallocate on overflow instead of being sized once.

use std::marker::PhantomData;

/// Smallest allocation, so empty scenes still get a valid buffer.
const MIN_BYTES: u64 = 256;

/// A GPU buffer holding a list of `T`, reallocated (never shrunk) when a
/// write exceeds its capacity.
pub struct DynamicBuffer<T> {
    buffer: wgpu::Buffer,
    label: &'static str,
    usage: wgpu::BufferUsages,
    /// Capacity in items.
    capacity: usize,
    /// Items written by the last upload.
    len: usize,
    _item: PhantomData<T>,
}

impl<T: bytemuck::Pod> DynamicBuffer<T> {
    /// Buffer with room for `capacity` items.
    pub fn new(
        device: &wgpu::Device,
        label: &'static str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let usage = usage | wgpu::BufferUsages::COPY_DST;
        Self {
            buffer: allocate::<T>(device, label, capacity, usage),
            label,
            usage,
            capacity,
            len: 0,
            _item: PhantomData,
        }
    }

    /// Replace the contents with `items`. Returns `true` when the buffer
    /// had to be reallocated, which invalidates earlier slices.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        items: &[T],
    ) -> bool {
        let grew = items.len() > self.capacity;
        if grew {
            let capacity = items.len().next_power_of_two();
            log::debug!(
                "{}: {} -> {} items",
                self.label,
                self.capacity,
                capacity
            );
            self.buffer = allocate::<T>(device, self.label, capacity, self.usage);
            self.capacity = capacity;
        }
        if !items.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(items));
        }
        self.len = items.len();
        grew
    }

    /// Forget the contents; nothing is drawn until the next write.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Slice over the written items. Only valid when not empty.
    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..byte_len::<T>(self.len))
    }

    /// Items written by the last upload.
    pub fn count(&self) -> u32 {
        self.len as u32
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn byte_len<T>(items: usize) -> u64 {
    (items * size_of::<T>()) as u64
}

fn allocate<T>(
    device: &wgpu::Device,
    label: &str,
    capacity: usize,
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    // write_buffer needs 4-byte aligned sizes.
    let size = byte_len::<T>(capacity).max(MIN_BYTES).next_multiple_of(4);
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage,
        mapped_at_creation: false,
    })
}
