//! Core wire primitives.
//!
//! Byte-level building blocks shared by every protocol layer: the packet
//! reader/writer and password digests.

pub mod hash;
pub mod packet;

// Re-export core types
pub use hash::{hash_password, verify_password};
pub use packet::{PacketError, PacketReader, PacketWriter};
