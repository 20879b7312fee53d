//! # Login Gateway
//!
//! Login server for a length-framed binary game protocol. Takes a client
//! from TCP accept to a hand-off directive naming the channel server.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      LOGIN GATEWAY                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Wire primitives                           │
//! │  ├── packet.rs   - Little-endian packet reader/writer        │
//! │  └── hash.rs     - SHA-512 password digests                  │
//! │                                                              │
//! │  store/          - Persistence                               │
//! │  ├── mod.rs      - Account/character rows, LoginStore trait  │
//! │  └── memory.rs   - In-memory store                           │
//! │                                                              │
//! │  login/          - Handshake logic                           │
//! │  ├── config.rs   - World/channel layout                      │
//! │  ├── character.rs- Creation allow-lists, deletion rules      │
//! │  ├── packets.rs  - Response builders                         │
//! │  ├── handlers.rs - One handler per opcode                    │
//! │  └── dispatcher.rs - Opcode routing, disconnect cleanup      │
//! │                                                              │
//! │  network/        - Transport                                 │
//! │  ├── server.rs   - TCP server, one task per connection       │
//! │  ├── protocol.rs - Opcodes and framing                       │
//! │  ├── session.rs  - Per-connection handshake state            │
//! │  └── auth.rs     - Login result codes                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Login
//!
//! An account is marked logged in by a conditional update in the store, so
//! two connections racing on the same credentials cannot both succeed. The
//! flag is cleared on return to the title screen or on disconnect, unless
//! the client was handed off to a channel server.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod login;
pub mod network;
pub mod store;

// Re-export commonly used types
pub use login::{LoginConfig, LoginService};
pub use network::{LoginServer, ServerConfig, Session};
pub use store::{Account, Character, LoginStore, MemoryStore, StoreError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
