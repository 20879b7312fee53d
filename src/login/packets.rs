//! Login Responses
//!
//! Builders for every packet the login server sends. Each returns a
//! finished packet ready for framing.

use std::net::Ipv4Addr;

use bytes::Bytes;

use crate::core::packet::PacketWriter;
use crate::login::character::DeleteOutcome;
use crate::login::config::WORLD_LIST_END;
use crate::network::auth::LoginResult;
use crate::network::protocol::SendOpcode;
use crate::store::{Account, Character, CharacterId};

/// Status byte for a refused character selection.
pub const SELECT_FAILED: u8 = 0x06;

/// Terminates an equipment list.
const EQUIP_LIST_END: u8 = 0xFF;

fn packet(opcode: SendOpcode) -> PacketWriter {
    PacketWriter::with_opcode(opcode.code())
}

/// Answer to a login request.
///
/// Account details are only included for success codes; a ban carries the
/// account's ban reason.
pub fn login_response(result: LoginResult, account: Option<&Account>) -> Bytes {
    let mut p = packet(SendOpcode::LoginResponse);
    p.write_u8(result.code()).write_u8(0).write_i32(0);

    match (result, account) {
        (r, Some(account)) if r.is_success() => {
            p.write_i32(account.account_id)
                .write_u8(account.gender)
                .write_bool(account.is_privileged())
                .write_u8(0x01)
                .write_string(&account.username);
        }
        (LoginResult::Banned, Some(account)) => {
            p.write_u8(account.ban_status).write_i64(0);
        }
        _ => {}
    }

    p.freeze()
}

/// One world entry with its channels.
pub fn world_listing(world_id: u8, name: &str, channels: u8) -> Bytes {
    let mut p = packet(SendOpcode::WorldList);
    p.write_u8(world_id)
        .write_string(name)
        .write_u8(0) // event flag
        .write_string("") // event message
        .write_u16(100) // exp rate
        .write_u16(100) // drop rate
        .write_u8(0)
        .write_u8(channels);

    for channel in 0..channels {
        p.write_string(&format!("{}-{}", name, channel as u16 + 1))
            .write_i32(0) // population
            .write_u8(world_id)
            .write_u8(channel)
            .write_u8(0);
    }

    p.write_u16(0);
    p.freeze()
}

/// End-of-list marker after the last world.
pub fn world_list_end() -> Bytes {
    let mut p = packet(SendOpcode::WorldList);
    p.write_u8(WORLD_LIST_END);
    p.freeze()
}

/// Status of the selected world.
pub fn world_info(status: u8, population: u8) -> Bytes {
    let mut p = packet(SendOpcode::WorldInfo);
    p.write_u8(status).write_u8(population);
    p.freeze()
}

/// Characters available in the selected world.
pub fn character_list(characters: &[Character]) -> Bytes {
    let mut p = packet(SendOpcode::CharacterList);
    p.write_u8(0).write_u8(characters.len().min(u8::MAX as usize) as u8);
    for character in characters.iter().take(u8::MAX as usize) {
        write_display_character(&mut p, character);
    }
    p.freeze()
}

/// Whether `name` is already used.
pub fn name_check(name: &str, taken: bool) -> Bytes {
    let mut p = packet(SendOpcode::NameCheck);
    p.write_string(name).write_bool(taken);
    p.freeze()
}

/// Creation result; a created character is echoed back in full.
pub fn new_character(created: Option<&Character>) -> Bytes {
    let mut p = packet(SendOpcode::NewCharacter);
    match created {
        Some(character) => {
            p.write_u8(0);
            write_display_character(&mut p, character);
        }
        None => {
            p.write_u8(1);
        }
    }
    p.freeze()
}

/// Deletion result.
pub fn delete_character(character_id: CharacterId, outcome: DeleteOutcome) -> Bytes {
    let mut p = packet(SendOpcode::DeleteCharacter);
    p.write_i32(character_id).write_u8(outcome.status());
    p.freeze()
}

/// Hand-off directive: connect to the channel server as `character_id`.
pub fn migrate_client(ip: Ipv4Addr, port: u16, character_id: CharacterId) -> Bytes {
    let mut p = packet(SendOpcode::MigrateClient);
    p.write_u8(0)
        .write_u8(0)
        .write_bytes(&ip.octets())
        .write_u16(port)
        .write_i32(character_id)
        .write_u8(0)
        .write_i32(0);
    p.freeze()
}

/// Refused selection; carries no address.
pub fn select_failed() -> Bytes {
    let mut p = packet(SendOpcode::MigrateClient);
    p.write_u8(SELECT_FAILED).write_u8(0);
    p.freeze()
}

/// Acknowledges a return to the title screen.
pub fn return_to_login() -> Bytes {
    let mut p = packet(SendOpcode::ReturnToLogin);
    p.write_u8(0x01);
    p.freeze()
}

/// Stats, avatar and rank block of one character.
fn write_display_character(p: &mut PacketWriter, character: &Character) {
    p.write_i32(character.character_id)
        .write_string(&character.name)
        .write_u8(character.gender)
        .write_u8(character.skin)
        .write_i32(character.face)
        .write_i32(character.hair)
        .write_u8(character.level)
        .write_i16(character.job)
        .write_i16(character.strength)
        .write_i16(character.dexterity)
        .write_i16(character.intelligence)
        .write_i16(character.luck)
        .write_i16(character.hp)
        .write_i16(character.max_hp)
        .write_i16(character.mp)
        .write_i16(character.max_mp)
        .write_i16(character.ap)
        .write_i16(character.sp)
        .write_i32(character.exp)
        .write_i16(character.fame)
        .write_i32(character.map_id)
        .write_u8(character.spawn_point);

    p.write_bytes(avatar(character).as_slice());

    p.write_u8(0); // rank disabled
}

/// Appearance block, shared with the channel server's spawn packets.
pub fn avatar(character: &Character) -> PacketWriter {
    let mut p = PacketWriter::new();
    p.write_u8(character.gender)
        .write_u8(character.skin)
        .write_i32(character.face)
        .write_u8(0)
        .write_i32(character.hair);

    for equip in character.equipment.iter().filter(|e| e.slot < 0) {
        p.write_u8(equip.slot.unsigned_abs() as u8).write_i32(equip.item_id);
    }
    p.write_u8(EQUIP_LIST_END); // visible equips
    p.write_u8(EQUIP_LIST_END); // cash equips
    p.write_i32(0); // cash weapon
    p
}
