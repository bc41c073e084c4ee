use int_buffer::IntBuffer;
use serde::Serialize;

/// Capacities an `IntBuffer` passes through while being filled by pushes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthProfile {
    pub appends: usize,
    pub reallocations: usize,
    pub capacities: Vec<usize>,
    pub final_len: usize,
    pub final_capacity: usize,
}

/// Value pushed at position `i`; saturates at `i32::MAX` rather than wrapping.
pub fn value_at(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

pub fn growth_profile(appends: usize) -> GrowthProfile {
    let mut buffer = IntBuffer::new();
    let mut capacities = Vec::new();
    for i in 0..appends {
        let before = buffer.capacity();
        buffer.push(value_at(i));
        if buffer.capacity() != before {
            capacities.push(buffer.capacity());
        }
    }

    GrowthProfile {
        appends,
        reallocations: capacities.len(),
        capacities,
        final_len: buffer.len(),
        final_capacity: buffer.capacity(),
    }
}

pub fn fill_int_buffer(size: usize) -> IntBuffer {
    let mut buffer = IntBuffer::new();
    for i in 0..size {
        buffer.push(value_at(i));
    }
    buffer
}

pub fn fill_reserved(size: usize) -> IntBuffer {
    let mut buffer = IntBuffer::new();
    buffer.reserve(size);
    for i in 0..size {
        buffer.push(value_at(i));
    }
    buffer
}

pub fn fill_std_vec(size: usize) -> Vec<i32> {
    let mut vec = Vec::new();
    for i in 0..size {
        vec.push(value_at(i));
    }
    vec
}
