pub mod cli;
pub mod commands;
pub mod point;
// Re-export the buffer crates for code built on top of this one
pub use int_buffer;
pub use memory_bench;
