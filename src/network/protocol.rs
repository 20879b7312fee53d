//! Protocol Constants
//!
//! Opcodes and stream framing for the login protocol.
//!
//! ```text
//! frame  = [u32 LE length] [packet]
//! packet = [u8 opcode] [opcode-specific fields, little-endian]
//! ```

use tokio_util::codec::LengthDelimitedCodec;

/// Default cap on a single inbound frame.
pub const DEFAULT_MAX_FRAME_LEN: usize = 64 * 1024;

/// Width of the frame length header.
pub const FRAME_HEADER_LEN: usize = 4;

/// Build the framing codec used on every connection.
pub fn frame_codec(max_frame_len: usize) -> LengthDelimitedCodec {
    LengthDelimitedCodec::builder()
        .length_field_length(FRAME_HEADER_LEN)
        .little_endian()
        .max_frame_length(max_frame_len)
        .new_codec()
}

// =============================================================================
// CLIENT -> SERVER
// =============================================================================

/// Opcodes accepted by the login server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RecvOpcode {
    /// Username and password.
    LoginRequest = 0x01,
    /// Channel chosen inside a world.
    ChannelSelect = 0x04,
    /// World chosen from the list.
    WorldSelect = 0x05,
    /// Request for the world list after login.
    CheckLogin = 0x08,
    /// Character chosen for play.
    SelectCharacter = 0x0B,
    /// Name availability check.
    NameCheck = 0x0D,
    /// Character creation form.
    NewCharacter = 0x0E,
    /// Character deletion with birth date confirmation.
    DeleteCharacter = 0x0F,
    /// Client went back to the title screen.
    ReturnToLogin = 0x1C,
}

impl TryFrom<u8> for RecvOpcode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x01 => Self::LoginRequest,
            0x04 => Self::ChannelSelect,
            0x05 => Self::WorldSelect,
            0x08 => Self::CheckLogin,
            0x0B => Self::SelectCharacter,
            0x0D => Self::NameCheck,
            0x0E => Self::NewCharacter,
            0x0F => Self::DeleteCharacter,
            0x1C => Self::ReturnToLogin,
            other => return Err(other),
        })
    }
}

// =============================================================================
// SERVER -> CLIENT
// =============================================================================

/// Opcodes written by the login server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SendOpcode {
    /// Result of a login request.
    LoginResponse = 0x01,
    /// Status of the selected world.
    WorldInfo = 0x03,
    /// One world entry, or the end-of-list marker.
    WorldList = 0x05,
    /// Characters in the selected world.
    CharacterList = 0x06,
    /// Hand-off to a channel server.
    MigrateClient = 0x07,
    /// Name availability answer.
    NameCheck = 0x08,
    /// Character creation result.
    NewCharacter = 0x09,
    /// Character deletion result.
    DeleteCharacter = 0x0A,
    /// Acknowledges a return to the title screen.
    ReturnToLogin = 0x16,
}

impl SendOpcode {
    /// Raw opcode byte.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}
