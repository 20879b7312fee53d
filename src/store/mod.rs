//! Persistence Interface
//!
//! Accounts and characters live in an external store. The login handlers
//! only see the [`LoginStore`] trait; every method is a single atomic
//! operation from the caller's point of view. Retry and pooling are the
//! implementation's concern.

pub mod memory;

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::MemoryStore;

/// Account identifier.
pub type AccountId = i32;

/// Character identifier.
pub type CharacterId = i32;

// =============================================================================
// RECORDS
// =============================================================================

/// Stored account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Primary key.
    pub account_id: AccountId,
    /// Login name.
    pub username: String,
    /// Hex SHA-512 of the password.
    pub password_hash: String,
    /// 0 = male, 1 = female.
    #[serde(default)]
    pub gender: u8,
    /// Set while a session owns the account.
    #[serde(default)]
    pub is_logged_in: bool,
    /// 0 = clear, >0 = banned with that sub-reason.
    #[serde(default)]
    pub ban_status: u8,
    /// 0 = player, >0 = staff.
    #[serde(default)]
    pub admin_level: i32,
    /// Birth date as `YYYYMMDD`, used to confirm deletions.
    #[serde(default)]
    pub date_of_birth: i32,
}

impl Account {
    /// True for staff accounts.
    pub fn is_privileged(&self) -> bool {
        self.admin_level > 0
    }
}

/// An equipped item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipSlot {
    /// Item template id.
    pub item_id: i32,
    /// Negative slot index; negative means "equipped".
    pub slot: i16,
}

/// Stored character row with its equipped items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub character_id: CharacterId,
    pub account_id: AccountId,
    pub world_id: u8,
    pub name: String,
    pub gender: u8,
    pub skin: u8,
    pub face: i32,
    /// Base hair plus colour offset.
    pub hair: i32,
    pub level: u8,
    pub job: i16,
    pub strength: i16,
    pub dexterity: i16,
    pub intelligence: i16,
    pub luck: i16,
    pub hp: i16,
    pub max_hp: i16,
    pub mp: i16,
    pub max_mp: i16,
    pub ap: i16,
    pub sp: i16,
    pub exp: i32,
    pub fame: i16,
    pub map_id: i32,
    pub spawn_point: u8,
    /// Equipped items, ordered by insertion.
    pub equipment: Vec<EquipSlot>,
}

/// Fields supplied when inserting a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub account_id: AccountId,
    pub world_id: u8,
    pub name: String,
    pub gender: u8,
    pub skin: u8,
    pub face: i32,
    pub hair: i32,
    pub strength: i16,
    pub dexterity: i16,
    pub intelligence: i16,
    pub luck: i16,
}

impl NewCharacter {
    /// Build the stored row for a freshly created character.
    pub fn into_character(self, character_id: CharacterId) -> Character {
        Character {
            character_id,
            account_id: self.account_id,
            world_id: self.world_id,
            name: self.name,
            gender: self.gender,
            skin: self.skin,
            face: self.face,
            hair: self.hair,
            level: 1,
            job: 0,
            strength: self.strength,
            dexterity: self.dexterity,
            intelligence: self.intelligence,
            luck: self.luck,
            hp: 50,
            max_hp: 50,
            mp: 5,
            max_mp: 5,
            ap: 0,
            sp: 0,
            exp: 0,
            fame: 0,
            map_id: 0,
            spawn_point: 0,
            equipment: Vec::new(),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Persistence failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A uniqueness rule rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Referenced account does not exist.
    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    /// Referenced character does not exist.
    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),

    /// Backend failure (connection, query, I/O).
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store calls.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// TRAIT
// =============================================================================

/// Account and character storage consumed by the login handlers.
pub trait LoginStore: Send + Sync + 'static {
    /// Look up an account by login name.
    fn find_account_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = StoreResult<Option<Account>>> + Send;

    /// Look up an account by id.
    fn find_account_by_id(
        &self,
        account_id: AccountId,
    ) -> impl Future<Output = StoreResult<Option<Account>>> + Send;

    /// Set `is_logged_in` only if it is currently clear.
    ///
    /// Returns `false` when another session already holds the account. This
    /// is the serialization point for the single-session rule.
    fn claim_login(&self, account_id: AccountId) -> impl Future<Output = StoreResult<bool>> + Send;

    /// Unconditionally set `is_logged_in`.
    fn set_logged_in(
        &self,
        account_id: AccountId,
        logged_in: bool,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    /// Characters owned by `account_id` in `world_id`, in creation order.
    fn find_characters_by_account_and_world(
        &self,
        account_id: AccountId,
        world_id: u8,
    ) -> impl Future<Output = StoreResult<Vec<Character>>> + Send;

    /// Characters named `name`, in one world or in all of them.
    fn count_characters_by_name(
        &self,
        name: &str,
        world_id: Option<u8>,
    ) -> impl Future<Output = StoreResult<usize>> + Send;

    /// True when `character_id` exists and belongs to `account_id`.
    fn character_owned_by(
        &self,
        account_id: AccountId,
        character_id: CharacterId,
    ) -> impl Future<Output = StoreResult<bool>> + Send;

    /// Insert a character; a name already used in the world is a
    /// [`StoreError::Conflict`].
    fn create_character(
        &self,
        character: NewCharacter,
    ) -> impl Future<Output = StoreResult<CharacterId>> + Send;

    /// Equip `item_id` at `slot`.
    fn add_equipment_slot(
        &self,
        character_id: CharacterId,
        item_id: i32,
        slot: i16,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    /// Remove a character and its items. Returns `false` if it did not exist.
    fn delete_character(
        &self,
        character_id: CharacterId,
    ) -> impl Future<Output = StoreResult<bool>> + Send;

    /// Stored birth date for the confirmation check.
    fn find_account_dob(
        &self,
        account_id: AccountId,
    ) -> impl Future<Output = StoreResult<Option<i32>>> + Send;
}
