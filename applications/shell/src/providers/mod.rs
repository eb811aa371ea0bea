//! Provider implementations bundled with the shell

mod memory;

pub use memory::MemoryProvider;
