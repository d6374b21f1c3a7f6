use crate::block_state::BlockState;
use std::collections::HashMap;

/// ID assigned to air in every palette.
pub const AIR_ID: u32 = 0;

/// Bijection from the block states a grid has ever held to small IDs.
///
/// Air is always ID 0. IDs are handed out in strictly increasing
/// first-introduction order and never reused or renumbered for the lifetime
/// of one grid; overwritten states keep their entries, so the palette only
/// grows.
#[derive(Debug, Clone)]
pub struct Palette {
    states: Vec<BlockState>,
    ids: HashMap<BlockState, u32>,
}

impl Palette {
    pub fn new() -> Self {
        let air = BlockState::air();
        let mut ids = HashMap::new();
        ids.insert(air.clone(), AIR_ID);
        Palette {
            states: vec![air],
            ids,
        }
    }

    /// Returns the ID for `state`, appending it with the next sequential ID
    /// if this grid has never seen it.
    pub fn id_for_state(&mut self, state: &BlockState) -> u32 {
        if let Some(&id) = self.ids.get(state) {
            return id;
        }
        let id = self.states.len() as u32;
        self.states.push(state.clone());
        self.ids.insert(state.clone(), id);
        id
    }

    /// Like `id_for_state`, but never inserts.
    pub fn lookup(&self, state: &BlockState) -> Option<u32> {
        self.ids.get(state).copied()
    }

    pub fn state_for_id(&self, id: u32) -> Option<&BlockState> {
        self.states.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        // Air is seeded at construction, so a palette is never empty.
        false
    }

    /// Iterates entries in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&BlockState, u32)> {
        self.states
            .iter()
            .enumerate()
            .map(|(id, state)| (state, id as u32))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_id_zero() {
        let palette = Palette::new();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.lookup(&BlockState::air()), Some(AIR_ID));
        assert!(palette.state_for_id(AIR_ID).unwrap().is_air());
    }

    #[test]
    fn test_ids_are_monotonic_and_stable() {
        let mut palette = Palette::new();
        let stone = BlockState::new("minecraft:stone");
        let planks = BlockState::new("minecraft:oak_planks");

        assert_eq!(palette.id_for_state(&stone), 1);
        assert_eq!(palette.id_for_state(&planks), 2);
        // Re-introducing a known state returns the original ID.
        assert_eq!(palette.id_for_state(&stone), 1);
        assert_eq!(palette.len(), 3);

        assert_eq!(palette.state_for_id(2), Some(&planks));
        assert_eq!(palette.state_for_id(3), None);
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut palette = Palette::new();
        palette.id_for_state(&BlockState::new("minecraft:stone"));
        palette.id_for_state(&BlockState::new("minecraft:dirt"));

        let ids: Vec<u32> = palette.iter().map(|(_, id)| id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        let names: Vec<&str> = palette.iter().map(|(state, _)| state.name()).collect();
        assert_eq!(
            names,
            vec!["minecraft:air", "minecraft:stone", "minecraft:dirt"]
        );
    }
}
