//! Opcode Dispatch
//!
//! [`LoginService`] holds the shared store and configuration and routes each
//! decoded packet to its handler.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::core::packet::{PacketError, PacketReader};
use crate::login::config::LoginConfig;
use crate::login::handlers::{self, HandlerError, Replies};
use crate::network::protocol::RecvOpcode;
use crate::network::session::Session;
use crate::store::{LoginStore, StoreError};

/// Shared state for all connections.
pub struct LoginService<S> {
    store: Arc<S>,
    config: Arc<LoginConfig>,
}

impl<S> Clone for LoginService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: LoginStore> LoginService<S> {
    /// Create a service over `store`.
    pub fn new(store: Arc<S>, config: LoginConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Persistence backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// World/channel configuration.
    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    /// Handle one inbound packet (opcode byte first).
    ///
    /// Unknown opcodes are logged and ignored. The returned packets are sent
    /// back in order.
    pub async fn dispatch(&self, session: &mut Session, packet: Bytes) -> Result<Replies, HandlerError> {
        let mut reader = PacketReader::new(packet);
        if reader.remaining() == 0 {
            return Err(PacketError::Empty.into());
        }
        let raw = reader.read_u8()?;

        let opcode = match RecvOpcode::try_from(raw) {
            Ok(op) => op,
            Err(code) => {
                warn!(opcode = code, "unknown opcode");
                return Ok(Replies::new());
            }
        };

        if !session.state().expects(opcode) {
            debug!(?opcode, state = ?session.state(), "opcode out of handshake order");
        }

        let r = &mut reader;
        match opcode {
            RecvOpcode::LoginRequest => handlers::handle_login_request(self, session, r).await,
            RecvOpcode::CheckLogin => handlers::handle_check_login(self, session, r).await,
            RecvOpcode::WorldSelect => handlers::handle_world_select(self, session, r).await,
            RecvOpcode::ChannelSelect => handlers::handle_channel_select(self, session, r).await,
            RecvOpcode::NameCheck => handlers::handle_name_check(self, session, r).await,
            RecvOpcode::NewCharacter => handlers::handle_new_character(self, session, r).await,
            RecvOpcode::DeleteCharacter => handlers::handle_delete_character(self, session, r).await,
            RecvOpcode::SelectCharacter => handlers::handle_select_character(self, session, r).await,
            RecvOpcode::ReturnToLogin => handlers::handle_return_to_login(self, session, r).await,
        }
    }

    /// Connection closed: release the account unless it was handed off.
    pub async fn release(&self, session: &Session) -> Result<(), StoreError> {
        if session.is_transferred() {
            return Ok(());
        }
        if let Some(account_id) = session.account_id() {
            self.store.set_logged_in(account_id, false).await?;
            debug!(account_id, "login flag cleared on disconnect");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::hash_password;
    use crate::core::packet::PacketWriter;
    use crate::login::character::DeleteOutcome;
    use crate::login::packets::SELECT_FAILED;
    use crate::network::protocol::SendOpcode;
    use crate::network::session::HandshakeState;
    use crate::store::{
        Account, AccountId, Character, CharacterId, MemoryStore, NewCharacter, StoreResult,
    };

    fn account(id: i32, username: &str, admin_level: i32) -> Account {
        Account {
            account_id: id,
            username: username.into(),
            password_hash: hash_password("secret"),
            gender: 0,
            is_logged_in: false,
            ban_status: 0,
            admin_level,
            date_of_birth: 19900101,
        }
    }

    fn service() -> LoginService<MemoryStore> {
        let store = MemoryStore::with_accounts([
            account(1, "alice", 0),
            account(2, "bob", 0),
            account(3, "admin", 1),
            Account { ban_status: 3, ..account(4, "mallory", 0) },
        ]);
        let config = LoginConfig {
            world_count: 3,
            channels_per_world: 2,
            ..Default::default()
        };
        LoginService::new(Arc::new(store), config)
    }

    fn login_packet(username: &str, password: &str) -> Bytes {
        let mut w = PacketWriter::with_opcode(RecvOpcode::LoginRequest as u8);
        w.write_string(username).write_string(password);
        w.freeze()
    }

    fn two_bytes(op: RecvOpcode, a: u8, b: u8) -> Bytes {
        let mut w = PacketWriter::with_opcode(op as u8);
        w.write_u8(a).write_u8(b);
        w.freeze()
    }

    fn creation_packet(name: &str) -> Bytes {
        let mut w = PacketWriter::with_opcode(RecvOpcode::NewCharacter as u8);
        w.write_string(name);
        for v in [20000, 30000, 7, 0, 1040002, 1060002, 1072001, 1302000] {
            w.write_i32(v);
        }
        w.write_u8(12).write_u8(5).write_u8(4).write_u8(4);
        w.freeze()
    }

    fn delete_packet(dob: i32, character_id: i32) -> Bytes {
        let mut w = PacketWriter::with_opcode(RecvOpcode::DeleteCharacter as u8);
        w.write_i32(dob).write_i32(character_id);
        w.freeze()
    }

    fn select_packet(character_id: i32) -> Bytes {
        let mut w = PacketWriter::with_opcode(RecvOpcode::SelectCharacter as u8);
        w.write_i32(character_id);
        w.freeze()
    }

    async fn logged_in(service: &LoginService<MemoryStore>, username: &str) -> Session {
        let mut session = Session::new();
        let replies = service.dispatch(&mut session, login_packet(username, "secret")).await.unwrap();
        assert_eq!(replies[0][1], 0);
        session
    }

    async fn at_channel(service: &LoginService<MemoryStore>, username: &str, world: u8) -> Session {
        let mut session = logged_in(service, username).await;
        service.dispatch(&mut session, two_bytes(RecvOpcode::WorldSelect, world, 0)).await.unwrap();
        service.dispatch(&mut session, two_bytes(RecvOpcode::ChannelSelect, world, 0)).await.unwrap();
        session
    }

    async fn seed_character(service: &LoginService<MemoryStore>, account_id: i32, world_id: u8, name: &str) -> i32 {
        service
            .store()
            .create_character(NewCharacter {
                account_id,
                world_id,
                name: name.into(),
                gender: 0,
                skin: 0,
                face: 20000,
                hair: 30000,
                strength: 4,
                dexterity: 4,
                intelligence: 4,
                luck: 4,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_codes() {
        let service = service();

        let mut s = Session::new();
        let r = service.dispatch(&mut s, login_packet("nobody", "secret")).await.unwrap();
        assert_eq!(r[0][1], 5);

        let r = service.dispatch(&mut s, login_packet("alice", "wrong")).await.unwrap();
        assert_eq!(r[0][1], 4);

        let r = service.dispatch(&mut s, login_packet("mallory", "secret")).await.unwrap();
        assert_eq!(r[0][1], 2);
        assert!(!s.is_authenticated());

        let r = service.dispatch(&mut s, login_packet("alice", "secret")).await.unwrap();
        assert_eq!(r[0][1], 0);
        assert_eq!(s.account_id(), Some(1));
        assert!(service.store().find_account_by_id(1).await.unwrap().unwrap().is_logged_in);

        let mut other = Session::new();
        let r = service.dispatch(&mut other, login_packet("alice", "secret")).await.unwrap();
        assert_eq!(r[0][1], 7);
        assert!(!other.is_authenticated());

        // The refused attempt leaves the holder's flag in place
        assert!(service.store().find_account_by_id(1).await.unwrap().unwrap().is_logged_in);
        assert_eq!(s.account_id(), Some(1));
    }

    #[tokio::test]
    async fn test_password_bytes_hashed_verbatim() {
        let service = service();
        service
            .store()
            .insert_account(Account {
                password_hash: hash_password([0xE9u8]),
                ..account(5, "eve", 0)
            })
            .await;

        let raw_login = |password: &[u8]| {
            let mut w = PacketWriter::with_opcode(RecvOpcode::LoginRequest as u8);
            w.write_string("eve").write_u16(password.len() as u16).write_bytes(password);
            w.freeze()
        };

        let mut s = Session::new();
        let r = service.dispatch(&mut s, raw_login("é".as_bytes())).await.unwrap();
        assert_eq!(r[0][1], 4);

        let r = service.dispatch(&mut s, raw_login(&[0xE9u8][..])).await.unwrap();
        assert_eq!(r[0][1], 0);
        assert_eq!(s.account_id(), Some(5));
    }

    #[tokio::test]
    async fn test_login_on_authenticated_session_is_dropped() {
        let service = service();
        let mut s = logged_in(&service, "alice").await;
        let r = service.dispatch(&mut s, login_packet("bob", "secret")).await.unwrap();
        assert!(r.is_empty());
        assert_eq!(s.account_id(), Some(1));
        assert!(!service.store().find_account_by_id(2).await.unwrap().unwrap().is_logged_in);
    }

    #[tokio::test]
    async fn test_concurrent_logins_single_winner() {
        let service = service();
        let mut tasks = Vec::new();
        for _ in 0..8 {
            let service = service.clone();
            tasks.push(tokio::spawn(async move {
                let mut s = Session::new();
                let r = service.dispatch(&mut s, login_packet("bob", "secret")).await.unwrap();
                r[0][1]
            }));
        }
        let mut codes = Vec::new();
        for t in tasks {
            codes.push(t.await.unwrap());
        }
        assert_eq!(codes.iter().filter(|&&c| c == 0).count(), 1);
        assert_eq!(codes.iter().filter(|&&c| c == 7).count(), 7);
    }

    #[tokio::test]
    async fn test_world_list() {
        let service = service();

        let mut anon = Session::new();
        let check = Bytes::from_static(&[RecvOpcode::CheckLogin as u8]);
        assert!(service.dispatch(&mut anon, check.clone()).await.unwrap().is_empty());

        let mut s = logged_in(&service, "alice").await;
        let r = service.dispatch(&mut s, check).await.unwrap();
        assert_eq!(r.len(), 4);
        assert_eq!(r[0][1], 2);
        assert_eq!(r[2][1], 0);
        assert_eq!(&r[3][..], &[SendOpcode::WorldList.code(), 0xFF]);
    }

    #[tokio::test]
    async fn test_world_and_channel_selection() {
        let service = service();
        let mut s = logged_in(&service, "alice").await;

        let r = service.dispatch(&mut s, two_bytes(RecvOpcode::WorldSelect, 9, 0)).await.unwrap();
        assert!(r.is_empty());
        assert_eq!(s.world_id(), None);

        let r = service.dispatch(&mut s, two_bytes(RecvOpcode::WorldSelect, 1, 0)).await.unwrap();
        assert_eq!(r[0][0], SendOpcode::WorldInfo.code());
        assert_eq!(s.world_id(), Some(1));

        // Channel for another world changes nothing
        let r = service.dispatch(&mut s, two_bytes(RecvOpcode::ChannelSelect, 2, 1)).await.unwrap();
        assert!(r.is_empty());
        assert_eq!(s.channel_id(), None);

        let r = service.dispatch(&mut s, two_bytes(RecvOpcode::ChannelSelect, 1, 5)).await.unwrap();
        assert!(r.is_empty());

        seed_character(&service, 1, 1, "Hero").await;
        seed_character(&service, 1, 2, "Elsewhere").await;
        let r = service.dispatch(&mut s, two_bytes(RecvOpcode::ChannelSelect, 1, 1)).await.unwrap();
        assert_eq!(r[0][0], SendOpcode::CharacterList.code());
        assert_eq!(r[0][2], 1);
        assert_eq!(s.channel_id(), Some(1));
        assert_eq!(s.state(), HandshakeState::CharacterListed);
    }

    #[tokio::test]
    async fn test_world_select_requires_login() {
        let service = service();
        let mut s = Session::new();
        let r = service.dispatch(&mut s, two_bytes(RecvOpcode::WorldSelect, 0, 0)).await.unwrap();
        assert!(r.is_empty());
        assert_eq!(s.world_id(), None);
    }

    #[tokio::test]
    async fn test_name_check_spans_worlds() {
        let service = service();
        seed_character(&service, 2, 2, "Taken").await;

        let mut s = Session::new();
        let mut w = PacketWriter::with_opcode(RecvOpcode::NameCheck as u8);
        w.write_string("Taken");
        let r = service.dispatch(&mut s, w.freeze()).await.unwrap();
        let mut reader = PacketReader::new(r[0].clone());
        reader.read_u8().unwrap();
        assert_eq!(reader.read_string().unwrap(), "Taken");
        assert!(reader.read_bool().unwrap());
    }

    #[tokio::test]
    async fn test_new_character() {
        let service = service();
        let mut s = at_channel(&service, "alice", 0).await;

        let r = service.dispatch(&mut s, creation_packet("Hero")).await.unwrap();
        assert_eq!(r[0][1], 0);
        let chars = service.store().find_characters_by_account_and_world(1, 0).await.unwrap();
        assert_eq!(chars.len(), 1);
        assert_eq!(chars[0].hair, 30007);
        assert_eq!(chars[0].equipment.len(), 4);

        // Duplicate name in the same world
        let r = service.dispatch(&mut s, creation_packet("Hero")).await.unwrap();
        assert_eq!(&r[0][..], &[SendOpcode::NewCharacter.code(), 1]);

        // Reserved characters
        let r = service.dispatch(&mut s, creation_packet("[GM]Fake")).await.unwrap();
        assert_eq!(r[0][1], 1);
        assert_eq!(service.store().find_characters_by_account_and_world(1, 0).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_new_character_needs_world() {
        let service = service();
        let mut s = logged_in(&service, "alice").await;
        let r = service.dispatch(&mut s, creation_packet("Hero")).await.unwrap();
        assert_eq!(r[0][1], 1);
        assert_eq!(service.store().count_characters_by_name("Hero", None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_privileged_character() {
        let service = service();
        let mut s = at_channel(&service, "admin", 0).await;
        let r = service.dispatch(&mut s, creation_packet("Boss")).await.unwrap();
        assert_eq!(r[0][1], 0);

        let chars = service.store().find_characters_by_account_and_world(3, 0).await.unwrap();
        assert_eq!(chars[0].name, "[GM]Boss");
        assert_eq!(chars[0].equipment.len(), 9);
    }

    #[tokio::test]
    async fn test_delete_character() {
        let service = service();
        let mine = seed_character(&service, 1, 0, "Mine").await;
        let theirs = seed_character(&service, 2, 0, "Theirs").await;
        let mut s = at_channel(&service, "alice", 0).await;

        let r = service.dispatch(&mut s, delete_packet(19900101, theirs)).await.unwrap();
        assert_eq!(r[0][5], DeleteOutcome::STATUS_HACKING);
        assert!(service.store().character_owned_by(2, theirs).await.unwrap());

        let r = service.dispatch(&mut s, delete_packet(20000101, mine)).await.unwrap();
        assert_eq!(r[0][5], DeleteOutcome::STATUS_BAD_BIRTHDAY);
        assert!(service.store().character_owned_by(1, mine).await.unwrap());

        let r = service.dispatch(&mut s, delete_packet(19900101, mine)).await.unwrap();
        assert_eq!(r[0][5], DeleteOutcome::STATUS_DELETED);
        assert!(!service.store().character_owned_by(1, mine).await.unwrap());
    }

    #[tokio::test]
    async fn test_select_character() {
        let service = service();
        let mine = seed_character(&service, 1, 0, "Mine").await;
        let theirs = seed_character(&service, 2, 0, "Theirs").await;
        let mut s = at_channel(&service, "alice", 0).await;

        let r = service.dispatch(&mut s, select_packet(theirs)).await.unwrap();
        assert_eq!(&r[0][..], &[SendOpcode::MigrateClient.code(), SELECT_FAILED, 0]);
        assert!(!s.is_transferred());

        let r = service.dispatch(&mut s, select_packet(mine)).await.unwrap();
        let mut reader = PacketReader::new(r[0].clone());
        assert_eq!(reader.read_u8().unwrap(), SendOpcode::MigrateClient.code());
        assert_eq!(reader.read_u16().unwrap(), 0);
        assert_eq!(&reader.read_bytes(4).unwrap()[..], &[127, 0, 0, 1]);
        assert_eq!(reader.read_u16().unwrap(), 8686);
        assert_eq!(reader.read_i32().unwrap(), mine);
        assert!(s.is_transferred());

        // The channel server owns the flag now
        service.release(&s).await.unwrap();
        assert!(service.store().find_account_by_id(1).await.unwrap().unwrap().is_logged_in);
    }

    #[tokio::test]
    async fn test_select_character_needs_chosen_world() {
        let service = service();
        let hero = seed_character(&service, 1, 2, "Hero").await;
        let failed = [SendOpcode::MigrateClient.code(), SELECT_FAILED, 0];

        // Logged in, nothing selected
        let mut s = logged_in(&service, "alice").await;
        let r = service.dispatch(&mut s, select_packet(hero)).await.unwrap();
        assert_eq!(&r[0][..], &failed);
        assert!(!s.is_transferred());

        // World chosen, channel not
        service.dispatch(&mut s, two_bytes(RecvOpcode::WorldSelect, 2, 0)).await.unwrap();
        let r = service.dispatch(&mut s, select_packet(hero)).await.unwrap();
        assert_eq!(&r[0][..], &failed);
        assert!(!s.is_transferred());

        // Owned, but chosen in another world
        service.dispatch(&mut s, two_bytes(RecvOpcode::WorldSelect, 0, 0)).await.unwrap();
        service.dispatch(&mut s, two_bytes(RecvOpcode::ChannelSelect, 0, 1)).await.unwrap();
        assert_eq!(s.channel_id(), Some(1));
        let r = service.dispatch(&mut s, select_packet(hero)).await.unwrap();
        assert_eq!(&r[0][..], &failed);
        assert!(!s.is_transferred());

        service.dispatch(&mut s, two_bytes(RecvOpcode::WorldSelect, 2, 0)).await.unwrap();
        service.dispatch(&mut s, two_bytes(RecvOpcode::ChannelSelect, 2, 0)).await.unwrap();
        let r = service.dispatch(&mut s, select_packet(hero)).await.unwrap();
        assert_eq!(r[0][1], 0);
        assert!(s.is_transferred());
    }

    #[tokio::test]
    async fn test_return_to_login_after_transfer_keeps_flag() {
        let service = service();
        let mine = seed_character(&service, 1, 0, "Mine").await;
        let mut s = at_channel(&service, "alice", 0).await;
        service.dispatch(&mut s, select_packet(mine)).await.unwrap();
        assert!(s.is_transferred());

        let r = service
            .dispatch(&mut s, Bytes::from_static(&[RecvOpcode::ReturnToLogin as u8]))
            .await
            .unwrap();
        assert_eq!(r[0][0], SendOpcode::ReturnToLogin.code());
        assert!(!s.is_authenticated());
        assert!(service.store().find_account_by_id(1).await.unwrap().unwrap().is_logged_in);
    }

    #[tokio::test]
    async fn test_return_to_login_allows_relogin() {
        let service = service();
        let mut s = at_channel(&service, "alice", 0).await;

        let r = service
            .dispatch(&mut s, Bytes::from_static(&[RecvOpcode::ReturnToLogin as u8]))
            .await
            .unwrap();
        assert_eq!(r[0][0], SendOpcode::ReturnToLogin.code());
        assert!(!s.is_authenticated());
        assert!(!service.store().find_account_by_id(1).await.unwrap().unwrap().is_logged_in);

        let r = service.dispatch(&mut s, login_packet("bob", "secret")).await.unwrap();
        assert_eq!(r[0][1], 0);
        assert_eq!(s.account_id(), Some(2));
    }

    #[tokio::test]
    async fn test_release_on_disconnect() {
        let service = service();
        let s = logged_in(&service, "alice").await;
        service.release(&s).await.unwrap();
        assert!(!service.store().find_account_by_id(1).await.unwrap().unwrap().is_logged_in);

        // Anonymous sessions touch nothing
        service.release(&Session::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_packets() {
        let service = service();
        let mut s = Session::new();

        let err = service.dispatch(&mut s, Bytes::new()).await.unwrap_err();
        assert!(matches!(err, HandlerError::Decode(PacketError::Empty)));
        assert!(!err.is_fatal());

        let r = service.dispatch(&mut s, Bytes::from_static(&[0xEE, 1, 2])).await.unwrap();
        assert!(r.is_empty());

        let err = service
            .dispatch(&mut s, Bytes::from_static(&[RecvOpcode::LoginRequest as u8, 0x05]))
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::Decode(_)));
        assert!(!s.is_authenticated());

        let err = service
            .dispatch(&mut s, Bytes::from_static(&[RecvOpcode::NameCheck as u8, 0x01, 0x00, 0xE9]))
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::Decode(PacketError::InvalidUtf8)));
    }

    /// Memory store whose name count is always stale, as if another
    /// connection inserted the name right after the check.
    struct StaleNameStore(MemoryStore);

    impl LoginStore for StaleNameStore {
        async fn find_account_by_username(&self, username: &str) -> StoreResult<Option<Account>> {
            self.0.find_account_by_username(username).await
        }

        async fn find_account_by_id(&self, account_id: AccountId) -> StoreResult<Option<Account>> {
            self.0.find_account_by_id(account_id).await
        }

        async fn claim_login(&self, account_id: AccountId) -> StoreResult<bool> {
            self.0.claim_login(account_id).await
        }

        async fn set_logged_in(&self, account_id: AccountId, logged_in: bool) -> StoreResult<()> {
            self.0.set_logged_in(account_id, logged_in).await
        }

        async fn find_characters_by_account_and_world(
            &self,
            account_id: AccountId,
            world_id: u8,
        ) -> StoreResult<Vec<Character>> {
            self.0.find_characters_by_account_and_world(account_id, world_id).await
        }

        async fn count_characters_by_name(&self, _name: &str, _world_id: Option<u8>) -> StoreResult<usize> {
            Ok(0)
        }

        async fn character_owned_by(&self, account_id: AccountId, character_id: CharacterId) -> StoreResult<bool> {
            self.0.character_owned_by(account_id, character_id).await
        }

        async fn create_character(&self, character: NewCharacter) -> StoreResult<CharacterId> {
            self.0.create_character(character).await
        }

        async fn add_equipment_slot(&self, character_id: CharacterId, item_id: i32, slot: i16) -> StoreResult<()> {
            self.0.add_equipment_slot(character_id, item_id, slot).await
        }

        async fn delete_character(&self, character_id: CharacterId) -> StoreResult<bool> {
            self.0.delete_character(character_id).await
        }

        async fn find_account_dob(&self, account_id: AccountId) -> StoreResult<Option<i32>> {
            self.0.find_account_dob(account_id).await
        }
    }

    #[tokio::test]
    async fn test_creation_race_replies_failure() {
        let inner = MemoryStore::with_accounts([account(1, "alice", 0), account(2, "bob", 0)]);
        let service = LoginService::new(Arc::new(StaleNameStore(inner)), LoginConfig::default());

        let mut s = Session::new();
        service.dispatch(&mut s, login_packet("alice", "secret")).await.unwrap();
        service.dispatch(&mut s, two_bytes(RecvOpcode::WorldSelect, 0, 0)).await.unwrap();
        service.dispatch(&mut s, two_bytes(RecvOpcode::ChannelSelect, 0, 0)).await.unwrap();

        // Bob wins the name between alice's check and her insert
        service
            .store()
            .0
            .create_character(NewCharacter {
                account_id: 2,
                world_id: 0,
                name: "Hero".into(),
                gender: 0,
                skin: 0,
                face: 20000,
                hair: 30000,
                strength: 4,
                dexterity: 4,
                intelligence: 4,
                luck: 4,
            })
            .await
            .unwrap();

        let r = service.dispatch(&mut s, creation_packet("Hero")).await.unwrap();
        assert_eq!(&r[0][..], &[SendOpcode::NewCharacter.code(), 1]);
        assert!(service.store().0.find_characters_by_account_and_world(1, 0).await.unwrap().is_empty());
        assert_eq!(service.store().0.count_characters_by_name("Hero", None).await.unwrap(), 1);
    }
}
