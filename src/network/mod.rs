//! Network Layer
//!
//! TCP server, framing, opcodes and per-connection session state.
//! Handshake logic lives in `login/`; this layer only moves packets.

pub mod auth;
pub mod protocol;
pub mod session;
pub mod server;

pub use auth::{check_credentials, LoginResult};
pub use protocol::{frame_codec, RecvOpcode, SendOpcode, DEFAULT_MAX_FRAME_LEN};
pub use session::{HandshakeState, Session, SessionError};
pub use server::{LoginServer, LoginServerError, ServerConfig};
