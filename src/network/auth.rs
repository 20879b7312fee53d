//! Credential Checks
//!
//! Maps a login attempt onto the client's numeric result codes. The order
//! of checks is part of the protocol: a banned account with a wrong
//! password reports "invalid password", so ban status never reveals that an
//! account exists.

use crate::core::hash::verify_password;
use crate::store::Account;

/// Result codes sent in the login response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LoginResult {
    /// Credentials accepted.
    Success = 0x00,
    /// Reserved; treated like success by the client.
    Reserved = 0x01,
    /// Account is banned.
    Banned = 0x02,
    /// Account deleted or blocked.
    Blocked = 0x03,
    /// Wrong password.
    InvalidPassword = 0x04,
    /// No such account.
    NotRegistered = 0x05,
    /// Generic failure.
    SystemError = 0x06,
    /// Account is already in use.
    AlreadyOnline = 0x07,
    /// Generic failure (alternate).
    SystemErrorAlt = 0x09,
    /// Rate limited.
    TooManyRequests = 0x0A,
    /// Age restriction.
    AgeRestricted = 0x0B,
    /// Staff account from a disallowed address.
    IpRestricted = 0x0D,
}

impl LoginResult {
    /// Raw code byte.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Codes the client treats as a successful login.
    #[inline]
    pub fn is_success(self) -> bool {
        self.code() <= LoginResult::Reserved.code()
    }
}

/// Decide the login result for a submitted password.
///
/// Priority: not registered, invalid password, already online, banned,
/// success.
pub fn check_credentials(account: Option<&Account>, password: impl AsRef<[u8]>) -> LoginResult {
    let Some(account) = account else {
        return LoginResult::NotRegistered;
    };

    if !verify_password(password, &account.password_hash) {
        LoginResult::InvalidPassword
    } else if account.is_logged_in {
        LoginResult::AlreadyOnline
    } else if account.ban_status > 0 {
        LoginResult::Banned
    } else {
        LoginResult::Success
    }
}
