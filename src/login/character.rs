//! Character Creation Rules
//!
//! Allow-lists for the creation screen, the reserved-name rule, starter
//! equipment and the deletion decision. Everything here is pure; storage
//! lookups (name uniqueness, ownership) are done by the handlers.

use crate::core::packet::{PacketError, PacketReader};

/// Faces selectable at creation.
pub const ALLOWED_FACES: &[i32] = &[
    20000, 20001, 20002, 21000, 21001, 21002, 20100, 20401, 20402, 21700, 21201,
];
/// Base hair styles.
pub const ALLOWED_HAIR: &[i32] = &[30000, 30020, 30030, 31000, 31040, 31050];
/// Hair colour offsets added to the base style.
pub const ALLOWED_HAIR_COLORS: &[i32] = &[0, 7, 3, 2];
/// Skin tones.
pub const ALLOWED_SKINS: &[i32] = &[0, 1, 2, 3];
/// Starter tops.
pub const ALLOWED_TOPS: &[i32] = &[
    1040002, 1040006, 1040010, 1041002, 1041006, 1041010, 1041011, 1042167,
];
/// Starter bottoms.
pub const ALLOWED_BOTTOMS: &[i32] = &[1060002, 1060006, 1061002, 1061008, 1062115];
/// Starter shoes.
pub const ALLOWED_SHOES: &[i32] = &[1072001, 1072005, 1072037, 1072038, 1072383];
/// Starter weapons.
pub const ALLOWED_WEAPONS: &[i32] = &[1302000, 1322005, 1312004, 1442079];

/// Name prefix given to staff characters.
pub const PRIVILEGED_PREFIX: &str = "[GM]";

/// Characters players may not use in names.
pub const RESERVED_NAME_CHARS: [char; 2] = ['[', ']'];

/// Equipped slot indices.
pub mod slot {
    pub const HAT: i16 = -1;
    pub const EARRINGS: i16 = -4;
    pub const TOP: i16 = -5;
    pub const BOTTOM: i16 = -6;
    pub const SHOES: i16 = -7;
    pub const GLOVES: i16 = -8;
    pub const CAPE: i16 = -9;
    pub const SHIELD: i16 = -10;
    pub const WEAPON: i16 = -11;
}

/// Fixed kit given to staff characters: `(item id, slot)`.
pub const ADMIN_KIT: [(i32, i16); 9] = [
    (1002140, slot::HAT),
    (1032006, slot::EARRINGS),
    (1042003, slot::TOP),
    (1062007, slot::BOTTOM),
    (1072004, slot::SHOES),
    (1082002, slot::GLOVES),
    (1102054, slot::CAPE),
    (1092008, slot::SHIELD),
    (1322013, slot::WEAPON),
];

/// Submitted creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterForm {
    pub name: String,
    pub face: i32,
    pub hair: i32,
    pub hair_color: i32,
    pub skin: i32,
    pub top: i32,
    pub bottom: i32,
    pub shoes: i32,
    pub weapon: i32,
    pub strength: u8,
    pub dexterity: u8,
    pub intelligence: u8,
    pub luck: u8,
}

impl CharacterForm {
    /// Decode the creation payload that follows the opcode.
    pub fn decode(reader: &mut PacketReader) -> Result<Self, PacketError> {
        Ok(Self {
            name: reader.read_string()?,
            face: reader.read_i32()?,
            hair: reader.read_i32()?,
            hair_color: reader.read_i32()?,
            skin: reader.read_i32()?,
            top: reader.read_i32()?,
            bottom: reader.read_i32()?,
            shoes: reader.read_i32()?,
            weapon: reader.read_i32()?,
            strength: reader.read_u8()?,
            dexterity: reader.read_u8()?,
            intelligence: reader.read_u8()?,
            luck: reader.read_u8()?,
        })
    }

    /// Hair id as stored: base style plus colour.
    pub fn stored_hair(&self) -> i32 {
        self.hair.wrapping_add(self.hair_color)
    }
}

/// Check a form against the allow-lists and the reserved-name rule.
///
/// Every rule is evaluated; the result does not depend on which one failed
/// first, so probing cannot map out the lists.
pub fn validate_form(form: &CharacterForm, privileged: bool) -> bool {
    let checks = [
        ALLOWED_FACES.contains(&form.face),
        ALLOWED_HAIR.contains(&form.hair),
        ALLOWED_HAIR_COLORS.contains(&form.hair_color),
        ALLOWED_SKINS.contains(&form.skin),
        ALLOWED_TOPS.contains(&form.top),
        ALLOWED_BOTTOMS.contains(&form.bottom),
        ALLOWED_SHOES.contains(&form.shoes),
        ALLOWED_WEAPONS.contains(&form.weapon),
        privileged || !form.name.contains(&RESERVED_NAME_CHARS[..]),
    ];
    checks.iter().fold(true, |ok, &check| ok & check)
}

/// Name the character will be stored under.
pub fn display_name(name: &str, privileged: bool) -> String {
    if privileged {
        format!("{}{}", PRIVILEGED_PREFIX, name)
    } else {
        name.to_string()
    }
}

/// Items equipped on a new character: `(item id, slot)`.
pub fn starter_equipment(form: &CharacterForm, privileged: bool) -> Vec<(i32, i16)> {
    if privileged {
        ADMIN_KIT.to_vec()
    } else {
        vec![
            (form.top, slot::TOP),
            (form.bottom, slot::BOTTOM),
            (form.shoes, slot::SHOES),
            (form.weapon, slot::WEAPON),
        ]
    }
}

/// Outcome of a deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The character was removed.
    pub deleted: bool,
    /// The character does not belong to the requester.
    pub hacking: bool,
}

impl DeleteOutcome {
    /// Status byte: deleted.
    pub const STATUS_DELETED: u8 = 0x00;
    /// Status byte: ownership check failed.
    pub const STATUS_HACKING: u8 = 0x0A;
    /// Status byte: birth date mismatch.
    pub const STATUS_BAD_BIRTHDAY: u8 = 0x12;

    /// Deletion needs both ownership and a matching birth date.
    pub fn decide(owned: bool, dob_matches: bool) -> Self {
        Self {
            deleted: owned && dob_matches,
            hacking: !owned,
        }
    }

    /// Status byte sent to the client.
    pub fn status(&self) -> u8 {
        if self.deleted {
            Self::STATUS_DELETED
        } else if self.hacking {
            Self::STATUS_HACKING
        } else {
            Self::STATUS_BAD_BIRTHDAY
        }
    }
}
