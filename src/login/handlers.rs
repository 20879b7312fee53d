//! Handshake Handlers
//!
//! One function per client opcode. Each decodes its payload, checks the
//! session and the store, updates the session and returns the packets to
//! send back (possibly none).
//!
//! Handlers that need an account drop the packet when the session is not
//! authenticated. Unset world/channel selections are treated as "no
//! selection", never as id 0.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::packet::{PacketError, PacketReader};
use crate::login::character::{
    display_name, starter_equipment, validate_form, CharacterForm, DeleteOutcome,
};
use crate::login::dispatcher::LoginService;
use crate::login::packets;
use crate::network::auth::{check_credentials, LoginResult};
use crate::network::session::{Session, SessionError};
use crate::store::{LoginStore, NewCharacter, StoreError};

/// Packets produced by one handler call, in send order.
pub type Replies = Vec<Bytes>;

/// Handler failures.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The packet was truncated or malformed; drop it.
    #[error("decode error: {0}")]
    Decode(#[from] PacketError),

    /// The store failed; the connection cannot continue safely.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Session invariant violated.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl HandlerError {
    /// Whether the connection should be closed.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, HandlerError::Decode(_))
    }
}

/// `LoginRequest`: username + password.
pub async fn handle_login_request<S: LoginStore>(
    service: &LoginService<S>,
    session: &mut Session,
    reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    let username = reader.read_string()?;
    let password = reader.read_raw_string()?;

    if let Some(account_id) = session.account_id() {
        warn!(account_id, username = %username, "login request on an authenticated session");
        return Ok(Replies::new());
    }

    let account = service.store().find_account_by_username(&username).await?;
    let mut result = check_credentials(account.as_ref(), &password);

    if let (true, Some(account)) = (result.is_success(), account.as_ref()) {
        // The flag read above may be stale; the conditional claim decides
        if service.store().claim_login(account.account_id).await? {
            session.authenticate(account)?;
            info!(account_id = account.account_id, "account logged in");
        } else {
            result = LoginResult::AlreadyOnline;
        }
    }

    if !result.is_success() {
        debug!(username = %username, code = result.code(), "login refused");
    }

    Ok(vec![packets::login_response(result, account.as_ref())])
}

/// `CheckLogin`: world list, highest id first, then the end marker.
pub async fn handle_check_login<S: LoginStore>(
    service: &LoginService<S>,
    session: &mut Session,
    _reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    if !session.is_authenticated() {
        warn!("world list requested before login");
        return Ok(Replies::new());
    }

    let config = service.config();
    let mut replies: Replies = (0..config.world_count)
        .rev()
        .map(|world_id| {
            packets::world_listing(world_id, &config.world_name(world_id), config.channels_per_world)
        })
        .collect();
    replies.push(packets::world_list_end());

    Ok(replies)
}

/// `WorldSelect`: record the world and describe it.
pub async fn handle_world_select<S: LoginStore>(
    service: &LoginService<S>,
    session: &mut Session,
    reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    let world_id = reader.read_u8()?;
    let _unknown = reader.read_u8()?;

    let Some(account_id) = session.account_id() else {
        warn!(world_id, "world select before login");
        return Ok(Replies::new());
    };

    if !service.config().has_world(world_id) {
        warn!(account_id, world_id, "selected world is not configured");
        return Ok(Replies::new());
    }

    session.select_world(world_id);
    debug!(account_id, world_id, "world selected");

    Ok(vec![packets::world_info(service.config().world_status, 0)])
}

/// `ChannelSelect`: record the channel and list characters, but only for
/// the world chosen earlier. Any mismatch is dropped without a reply.
pub async fn handle_channel_select<S: LoginStore>(
    service: &LoginService<S>,
    session: &mut Session,
    reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    let world_id = reader.read_u8()?;
    let channel_id = reader.read_u8()?;

    let Some(account_id) = session.account_id() else {
        warn!(world_id, channel_id, "channel select before login");
        return Ok(Replies::new());
    };

    if session.world_id() != Some(world_id) {
        warn!(
            account_id,
            world_id,
            selected = ?session.world_id(),
            "channel select for a world that was not selected"
        );
        return Ok(Replies::new());
    }

    if !service.config().has_channel(channel_id) {
        warn!(account_id, world_id, channel_id, "selected channel is not configured");
        return Ok(Replies::new());
    }

    let characters = service
        .store()
        .find_characters_by_account_and_world(account_id, world_id)
        .await?;

    session.select_channel(channel_id);
    session.mark_characters_listed();
    debug!(account_id, world_id, channel_id, count = characters.len(), "characters listed");

    Ok(vec![packets::character_list(&characters)])
}

/// `NameCheck`: is the name used in any world.
pub async fn handle_name_check<S: LoginStore>(
    service: &LoginService<S>,
    _session: &mut Session,
    reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    let name = reader.read_string()?;
    let count = service.store().count_characters_by_name(&name, None).await?;
    Ok(vec![packets::name_check(&name, count > 0)])
}

/// `NewCharacter`: validate, insert, equip, and echo the stored row.
pub async fn handle_new_character<S: LoginStore>(
    service: &LoginService<S>,
    session: &mut Session,
    reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    let form = CharacterForm::decode(reader)?;

    let Some(account_id) = session.account_id() else {
        warn!(name = %form.name, "character creation before login");
        return Ok(Replies::new());
    };

    let Some(world_id) = session.world_id() else {
        warn!(account_id, "character creation without a selected world");
        return Ok(vec![packets::new_character(None)]);
    };

    let privileged = session.is_privileged();
    let name = display_name(&form.name, privileged);
    let store = service.store();

    let name_free = store.count_characters_by_name(&name, Some(world_id)).await? == 0;
    let form_ok = validate_form(&form, privileged);

    if !(name_free & form_ok) {
        debug!(account_id, world_id, name_free, "character creation refused");
        return Ok(vec![packets::new_character(None)]);
    }

    let insert = NewCharacter {
        account_id,
        world_id,
        name,
        gender: session.gender(),
        // Allow-listed skins fit in a byte
        skin: form.skin as u8,
        face: form.face,
        hair: form.stored_hair(),
        strength: form.strength.into(),
        dexterity: form.dexterity.into(),
        intelligence: form.intelligence.into(),
        luck: form.luck.into(),
    };

    let character_id = match store.create_character(insert).await {
        Ok(id) => id,
        Err(StoreError::Conflict(reason)) => {
            debug!(account_id, world_id, %reason, "character name lost a creation race");
            return Ok(vec![packets::new_character(None)]);
        }
        Err(e) => return Err(e.into()),
    };

    for (item_id, slot) in starter_equipment(&form, privileged) {
        store.add_equipment_slot(character_id, item_id, slot).await?;
    }

    let created = store
        .find_characters_by_account_and_world(account_id, world_id)
        .await?
        .into_iter()
        .find(|c| c.character_id == character_id)
        .ok_or(StoreError::CharacterNotFound(character_id))?;

    info!(account_id, world_id, character_id, name = %created.name, "character created");
    Ok(vec![packets::new_character(Some(&created))])
}

/// `DeleteCharacter`: birth date + owned character id.
pub async fn handle_delete_character<S: LoginStore>(
    service: &LoginService<S>,
    session: &mut Session,
    reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    let dob = reader.read_i32()?;
    let character_id = reader.read_i32()?;

    let Some(account_id) = session.account_id() else {
        warn!(character_id, "character deletion before login");
        return Ok(Replies::new());
    };

    let store = service.store();
    let stored_dob = store.find_account_dob(account_id).await?;
    let owned = store.character_owned_by(account_id, character_id).await?;

    let outcome = DeleteOutcome::decide(owned, stored_dob == Some(dob));

    if outcome.hacking {
        warn!(account_id, character_id, "attempted to delete a character they do not own");
    }

    if outcome.deleted {
        store.delete_character(character_id).await?;
        info!(account_id, character_id, "character deleted");
    }

    Ok(vec![packets::delete_character(character_id, outcome)])
}

/// `SelectCharacter`: hand the client to the channel server.
///
/// The character must be owned by the account and live in the world the
/// session selected; a world and a channel must both have been chosen.
pub async fn handle_select_character<S: LoginStore>(
    service: &LoginService<S>,
    session: &mut Session,
    reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    let character_id = reader.read_i32()?;

    let Some(account_id) = session.account_id() else {
        warn!(character_id, "character selection before login");
        return Ok(Replies::new());
    };

    let (Some(world_id), Some(channel_id)) = (session.world_id(), session.channel_id()) else {
        warn!(
            account_id,
            character_id,
            world_id = ?session.world_id(),
            channel_id = ?session.channel_id(),
            "character selection without a chosen world and channel"
        );
        return Ok(vec![packets::select_failed()]);
    };

    let in_world = service
        .store()
        .find_characters_by_account_and_world(account_id, world_id)
        .await?
        .iter()
        .any(|c| c.character_id == character_id);

    if !in_world {
        warn!(
            account_id,
            character_id,
            world_id,
            "attempted to select a character they do not own in this world"
        );
        return Ok(vec![packets::select_failed()]);
    }

    let target = service.config().channel_server;
    session.mark_transferred();
    info!(account_id, character_id, world_id, channel_id, %target, "handing off to channel server");

    Ok(vec![packets::migrate_client(*target.ip(), target.port(), character_id)])
}

/// `ReturnToLogin`: release the account and start over.
///
/// After a hand-off the login flag belongs to the channel server and is
/// left alone.
pub async fn handle_return_to_login<S: LoginStore>(
    service: &LoginService<S>,
    session: &mut Session,
    _reader: &mut PacketReader,
) -> Result<Replies, HandlerError> {
    match session.account_id() {
        Some(account_id) if session.is_transferred() => {
            debug!(account_id, "returned to login after hand-off; flag left to channel server");
        }
        Some(account_id) => {
            service.store().set_logged_in(account_id, false).await?;
            info!(account_id, "returned to login screen");
        }
        None => {}
    }
    session.return_to_login();

    Ok(vec![packets::return_to_login()])
}
