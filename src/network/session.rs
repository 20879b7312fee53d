//! Connection Session
//!
//! Per-connection login state. A [`Session`] is owned by exactly one
//! connection task and handed to each handler as `&mut`; nothing else reads
//! or writes it.

use thiserror::Error;

use crate::network::protocol::RecvOpcode;
use crate::store::{Account, AccountId};

/// Position in the login handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandshakeState {
    /// Connected, not logged in.
    #[default]
    Fresh,
    /// Credentials accepted.
    Authenticated,
    /// World selected.
    WorldChosen,
    /// Channel selected.
    ChannelChosen,
    /// Character list sent.
    CharacterListed,
    /// Hand-off directive sent; the channel server owns the client now.
    SelectedForTransfer,
    /// Client went back to the title screen.
    ReturnedToLogin,
}

impl HandshakeState {
    /// Whether `opcode` is an expected step from this state.
    ///
    /// Unexpected opcodes are still handled on a best-effort basis; this
    /// only drives logging.
    pub fn expects(self, opcode: RecvOpcode) -> bool {
        use HandshakeState::*;
        use RecvOpcode as Op;

        match opcode {
            Op::NameCheck | Op::ReturnToLogin => true,
            Op::LoginRequest => matches!(self, Fresh | ReturnedToLogin),
            Op::CheckLogin => self == Authenticated,
            Op::WorldSelect => matches!(self, Authenticated | WorldChosen | ChannelChosen | CharacterListed),
            Op::ChannelSelect => matches!(self, WorldChosen | ChannelChosen | CharacterListed),
            Op::NewCharacter | Op::DeleteCharacter | Op::SelectCharacter => {
                matches!(self, ChannelChosen | CharacterListed)
            }
        }
    }
}

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session already holds an account.
    #[error("session already bound to account {0}")]
    AlreadyAuthenticated(AccountId),
}

/// Mutable login state of one connection.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: HandshakeState,
    authenticated: bool,
    account_id: AccountId,
    gender: u8,
    admin_level: i32,
    world_id: Option<u8>,
    channel_id: Option<u8>,
}

impl Session {
    /// New session in the `Fresh` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the session to an account after a successful login.
    ///
    /// Fails if the session is already authenticated; the account binding
    /// cannot be replaced mid-session.
    pub fn authenticate(&mut self, account: &Account) -> Result<(), SessionError> {
        if self.authenticated {
            return Err(SessionError::AlreadyAuthenticated(self.account_id));
        }

        self.authenticated = true;
        self.account_id = account.account_id;
        self.gender = account.gender;
        self.admin_level = account.admin_level;
        self.world_id = None;
        self.channel_id = None;
        self.state = HandshakeState::Authenticated;
        Ok(())
    }

    /// Current handshake state.
    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// Whether login succeeded on this connection.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Bound account, if authenticated.
    pub fn account_id(&self) -> Option<AccountId> {
        self.authenticated.then_some(self.account_id)
    }

    /// Account gender, 0 before login.
    pub fn gender(&self) -> u8 {
        self.gender
    }

    /// Account admin level, 0 before login.
    pub fn admin_level(&self) -> i32 {
        self.admin_level
    }

    /// Staff accounts.
    pub fn is_privileged(&self) -> bool {
        self.authenticated && self.admin_level > 0
    }

    /// Selected world, `None` until chosen.
    pub fn world_id(&self) -> Option<u8> {
        self.world_id
    }

    /// Selected channel, `None` until chosen.
    pub fn channel_id(&self) -> Option<u8> {
        self.channel_id
    }

    /// Record the chosen world. Any previous channel choice is dropped.
    pub fn select_world(&mut self, world_id: u8) {
        self.world_id = Some(world_id);
        self.channel_id = None;
        self.state = HandshakeState::WorldChosen;
    }

    /// Record the chosen channel.
    pub fn select_channel(&mut self, channel_id: u8) {
        self.channel_id = Some(channel_id);
        self.state = HandshakeState::ChannelChosen;
    }

    /// Mark the character list as sent.
    pub fn mark_characters_listed(&mut self) {
        self.state = HandshakeState::CharacterListed;
    }

    /// Mark the hand-off directive as sent.
    pub fn mark_transferred(&mut self) {
        self.state = HandshakeState::SelectedForTransfer;
    }

    /// Whether the channel server now owns the account's login flag.
    pub fn is_transferred(&self) -> bool {
        self.state == HandshakeState::SelectedForTransfer
    }

    /// Drop authentication and selections; the client starts over.
    ///
    /// Returns the account that was bound, if any.
    pub fn return_to_login(&mut self) -> Option<AccountId> {
        let previous = self.account_id();
        *self = Self {
            state: HandshakeState::ReturnedToLogin,
            ..Self::default()
        };
        previous
    }
}
