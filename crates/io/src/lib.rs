//! Neo.IO
//!
//! Little-endian binary primitives used by every Neo wire format: a growable
//! [`BinaryWriter`], a bounds-checked [`MemoryReader`] cursor, and the
//! [`Serializable`] trait tying them together.

mod binary_writer;
mod error;
mod memory_reader;
pub mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use memory_reader::MemoryReader;
pub use serializable::{helper, Serializable, SerializableExt};
