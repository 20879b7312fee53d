//! In-Memory Store
//!
//! [`LoginStore`] backed by ordered maps behind one async lock. Used by the
//! binary when no external database is wired in, and by the tests.

use std::collections::BTreeMap;
use std::path::Path;

use tokio::sync::RwLock;
use tracing::debug;

use super::{
    Account, AccountId, Character, CharacterId, EquipSlot, LoginStore, NewCharacter,
    StoreError, StoreResult,
};

#[derive(Debug, Default)]
struct Tables {
    accounts: BTreeMap<AccountId, Account>,
    characters: BTreeMap<CharacterId, Character>,
    next_character_id: CharacterId,
}

/// Store holding every table in memory.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_character_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Create a store pre-populated with accounts.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let mut tables = Tables {
            next_character_id: 1,
            ..Default::default()
        };
        for account in accounts {
            tables.accounts.insert(account.account_id, account);
        }
        Self { tables: RwLock::new(tables) }
    }

    /// Load accounts from a JSON array of [`Account`] objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Backend(format!("reading {}: {}", path.display(), e)))?;
        let accounts: Vec<Account> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Backend(format!("parsing {}: {}", path.display(), e)))?;
        Ok(Self::with_accounts(accounts))
    }

    /// Insert or replace an account.
    pub async fn insert_account(&self, account: Account) {
        let mut tables = self.tables.write().await;
        tables.accounts.insert(account.account_id, account);
    }

    /// Insert a character row as-is, keeping its id.
    pub async fn insert_character(&self, character: Character) {
        let mut tables = self.tables.write().await;
        if character.character_id >= tables.next_character_id {
            tables.next_character_id = character.character_id + 1;
        }
        tables.characters.insert(character.character_id, character);
    }

    /// Number of stored accounts.
    pub async fn account_count(&self) -> usize {
        self.tables.read().await.accounts.len()
    }

    /// Fetch a character by id.
    pub async fn character(&self, character_id: CharacterId) -> Option<Character> {
        self.tables.read().await.characters.get(&character_id).cloned()
    }
}

impl LoginStore for MemoryStore {
    async fn find_account_by_username(&self, username: &str) -> StoreResult<Option<Account>> {
        let tables = self.tables.read().await;
        Ok(tables.accounts.values().find(|a| a.username == username).cloned())
    }

    async fn find_account_by_id(&self, account_id: AccountId) -> StoreResult<Option<Account>> {
        let tables = self.tables.read().await;
        Ok(tables.accounts.get(&account_id).cloned())
    }

    async fn claim_login(&self, account_id: AccountId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let account = tables
            .accounts
            .get_mut(&account_id)
            .ok_or(StoreError::AccountNotFound(account_id))?;

        if account.is_logged_in {
            return Ok(false);
        }
        account.is_logged_in = true;
        Ok(true)
    }

    async fn set_logged_in(&self, account_id: AccountId, logged_in: bool) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let account = tables
            .accounts
            .get_mut(&account_id)
            .ok_or(StoreError::AccountNotFound(account_id))?;
        account.is_logged_in = logged_in;
        Ok(())
    }

    async fn find_characters_by_account_and_world(
        &self,
        account_id: AccountId,
        world_id: u8,
    ) -> StoreResult<Vec<Character>> {
        let tables = self.tables.read().await;
        Ok(tables
            .characters
            .values()
            .filter(|c| c.account_id == account_id && c.world_id == world_id)
            .cloned()
            .collect())
    }

    async fn count_characters_by_name(&self, name: &str, world_id: Option<u8>) -> StoreResult<usize> {
        let tables = self.tables.read().await;
        Ok(tables
            .characters
            .values()
            .filter(|c| c.name == name && world_id.map_or(true, |w| c.world_id == w))
            .count())
    }

    async fn character_owned_by(
        &self,
        account_id: AccountId,
        character_id: CharacterId,
    ) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .characters
            .get(&character_id)
            .is_some_and(|c| c.account_id == account_id))
    }

    async fn create_character(&self, character: NewCharacter) -> StoreResult<CharacterId> {
        let mut tables = self.tables.write().await;

        // Re-checked under the write lock so two racing inserts cannot both win
        let taken = tables
            .characters
            .values()
            .any(|c| c.world_id == character.world_id && c.name == character.name);
        if taken {
            return Err(StoreError::Conflict(format!(
                "name {:?} already used in world {}",
                character.name, character.world_id
            )));
        }

        let id = tables.next_character_id;
        tables.next_character_id += 1;
        tables.characters.insert(id, character.into_character(id));

        debug!(character_id = id, "character row inserted");
        Ok(id)
    }

    async fn add_equipment_slot(
        &self,
        character_id: CharacterId,
        item_id: i32,
        slot: i16,
    ) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let character = tables
            .characters
            .get_mut(&character_id)
            .ok_or(StoreError::CharacterNotFound(character_id))?;
        character.equipment.push(EquipSlot { item_id, slot });
        Ok(())
    }

    async fn delete_character(&self, character_id: CharacterId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.characters.remove(&character_id).is_some())
    }

    async fn find_account_dob(&self, account_id: AccountId) -> StoreResult<Option<i32>> {
        let tables = self.tables.read().await;
        Ok(tables.accounts.get(&account_id).map(|a| a.date_of_birth))
    }
}
