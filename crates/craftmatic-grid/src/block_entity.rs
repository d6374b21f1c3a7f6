use serde::{Deserialize, Serialize};

/// A sign always carries exactly this many lines of text.
pub const SIGN_LINES: usize = 4;

/// Block entity `Id` shared by all sign variants.
pub const SIGN_ENTITY_ID: &str = "minecraft:sign";

/// One inventory slot inside a container block entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSlot {
    pub slot: u8,
    pub id: String,
    pub count: u8,
}

impl ItemSlot {
    pub fn new(slot: u8, id: impl Into<String>, count: u8) -> Self {
        ItemSlot {
            slot,
            id: id.into(),
            count,
        }
    }
}

/// The payload a block entity carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockEntityKind {
    Container { items: Vec<ItemSlot> },
    Sign { lines: [String; SIGN_LINES] },
}

/// Supplementary metadata attached to one grid coordinate.
///
/// The grid does not police duplicates; at most one record per coordinate is
/// meaningful and callers are responsible for not double-registering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntity {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub kind: BlockEntityKind,
}

impl BlockEntity {
    pub fn container(id: impl Into<String>, x: i32, y: i32, z: i32, items: Vec<ItemSlot>) -> Self {
        BlockEntity {
            id: id.into(),
            x,
            y,
            z,
            kind: BlockEntityKind::Container { items },
        }
    }

    pub fn sign(x: i32, y: i32, z: i32, lines: [String; SIGN_LINES]) -> Self {
        BlockEntity {
            id: SIGN_ENTITY_ID.to_string(),
            x,
            y,
            z,
            kind: BlockEntityKind::Sign { lines },
        }
    }

    pub fn pos(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }
}

/// Pads or truncates to exactly `SIGN_LINES` entries; missing lines become
/// empty strings.
pub fn pad_sign_lines(lines: &[String]) -> [String; SIGN_LINES] {
    std::array::from_fn(|i| lines.get(i).cloned().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_sign_lines() {
        let padded = pad_sign_lines(&["hello".to_string()]);
        assert_eq!(padded, ["hello", "", "", ""].map(String::from));

        let exact: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
        assert_eq!(pad_sign_lines(&exact), ["a", "b", "c", "d"].map(String::from));

        let extra: Vec<String> = ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec();
        assert_eq!(pad_sign_lines(&extra), ["a", "b", "c", "d"].map(String::from));

        assert_eq!(pad_sign_lines(&[]), ["", "", "", ""].map(String::from));
    }

    #[test]
    fn test_constructors() {
        let chest = BlockEntity::container(
            "minecraft:chest",
            1,
            2,
            3,
            vec![ItemSlot::new(0, "minecraft:bread", 8)],
        );
        assert_eq!(chest.pos(), (1, 2, 3));
        assert_eq!(chest.id, "minecraft:chest");

        let sign = BlockEntity::sign(4, 5, 6, pad_sign_lines(&["hi".to_string()]));
        assert_eq!(sign.id, SIGN_ENTITY_ID);
        assert_eq!(sign.pos(), (4, 5, 6));
    }
}
