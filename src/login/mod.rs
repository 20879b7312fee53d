//! Login Handshake
//!
//! Everything between "socket accepted" and "client handed to a channel
//! server": world/channel layout, character creation rules, response
//! packets and the per-opcode handlers.

pub mod character;
pub mod config;
pub mod dispatcher;
pub mod handlers;
pub mod packets;

pub use config::{ConfigError, LoginConfig};
pub use dispatcher::LoginService;
pub use handlers::{HandlerError, Replies};
