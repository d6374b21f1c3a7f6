use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, crate::error::CraftmaticError>;

/// Horizontal orientation of a placed block (doors, chests, wall signs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    /// The value used for the `facing` block state property.
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::South => "south",
            Facing::East => "east",
            Facing::West => "west",
        }
    }
}

impl Display for Facing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which container block a placement operation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    Chest,
    TrappedChest,
}

impl ContainerKind {
    pub fn block_id(&self) -> &'static str {
        match self {
            ContainerKind::Chest => "minecraft:chest",
            ContainerKind::TrappedChest => "minecraft:trapped_chest",
        }
    }

    /// The block entity `Id` written for the container's inventory record.
    pub fn entity_id(&self) -> &'static str {
        self.block_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_display() {
        assert_eq!(format!("{}", Facing::North), "north");
        assert_eq!(format!("{}", Facing::South), "south");
        assert_eq!(format!("{}", Facing::East), "east");
        assert_eq!(format!("{}", Facing::West), "west");
    }

    #[test]
    fn test_container_kind_ids() {
        assert_eq!(ContainerKind::Chest.block_id(), "minecraft:chest");
        assert_eq!(ContainerKind::TrappedChest.block_id(), "minecraft:trapped_chest");
        assert_eq!(
            ContainerKind::TrappedChest.entity_id(),
            "minecraft:trapped_chest"
        );
    }
}
