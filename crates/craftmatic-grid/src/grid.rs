use crate::block_entity::{pad_sign_lines, BlockEntity, ItemSlot};
use crate::block_state::BlockState;
use crate::palette::{Palette, AIR_ID};
use craftmatic_common::{ContainerKind, CraftmaticError, Facing, Result};

const WALL_SIGN_BLOCK: &str = "minecraft:oak_wall_sign";

/// Dense 3D block store with a grid-owned compacting palette and attached
/// block-entity records.
///
/// The cell at (x, y, z) lives at flat offset `(y * length + z) * width + x`;
/// the schematic format depends on exactly this ordering.
pub struct Grid {
    width: i32,
    height: i32,
    length: i32,
    blocks: Vec<u32>,
    palette: Palette,
    block_entities: Vec<BlockEntity>,
}

impl Grid {
    /// Creates a grid of `width * height * length` air cells.
    ///
    /// Dimensions come from generator constants, not untrusted input, so a
    /// non-positive dimension is a programmer error and panics.
    pub fn new(width: i32, height: i32, length: i32) -> Self {
        assert!(
            width >= 1 && height >= 1 && length >= 1,
            "grid dimensions must each be at least 1"
        );
        let cells = width as usize * height as usize * length as usize;
        Grid {
            width,
            height,
            length,
            blocks: vec![AIR_ID; cells],
            palette: Palette::new(),
            block_entities: Vec::new(),
        }
    }

    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if x < 0 || y < 0 || z < 0 || x >= self.width || y >= self.height || z >= self.length {
            return None;
        }
        Some(((y * self.length + z) * self.width + x) as usize)
    }

    /// Returns the block state at (x, y, z), or air for any coordinate
    /// outside the grid. Out-of-bounds reads never fail, so neighbor-probing
    /// callers need no bounds checks of their own.
    pub fn get(&self, x: i32, y: i32, z: i32) -> &BlockState {
        let id = match self.index(x, y, z) {
            Some(i) => self.blocks[i],
            None => AIR_ID,
        };
        self.palette
            .state_for_id(id)
            .expect("block store holds an id the palette does not know")
    }

    /// Stores `state` at (x, y, z). Writes outside the grid are silent
    /// no-ops so generation code may write past nominal bounds.
    pub fn set(&mut self, x: i32, y: i32, z: i32, state: BlockState) {
        if let Some(i) = self.index(x, y, z) {
            let id = self.palette.id_for_state(&state);
            self.blocks[i] = id;
        }
    }

    /// Bulk `set` over the inclusive box between the two corners; the
    /// corners may be given in either order per axis.
    pub fn fill(&mut self, x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32, state: &BlockState) {
        let (x_min, x_max) = clamped_axis(x1, x2, self.width);
        let (y_min, y_max) = clamped_axis(y1, y2, self.height);
        let (z_min, z_max) = clamped_axis(z1, z2, self.length);
        if x_min > x_max || y_min > y_max || z_min > z_max {
            return;
        }

        let id = self.palette.id_for_state(state);
        for y in y_min..=y_max {
            for z in z_min..=z_max {
                let row = ((y * self.length + z) * self.width) as usize;
                for x in x_min..=x_max {
                    self.blocks[row + x as usize] = id;
                }
            }
        }
    }

    /// Resets the inclusive box back to air.
    pub fn clear(&mut self, x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) {
        self.fill(x1, y1, z1, x2, y2, z2, &BlockState::air());
    }

    /// Like `fill`, restricted to the box's four vertical faces: the x/z
    /// perimeter over the full y range. Builds hollow rooms without a
    /// separate interior-clearing pass.
    pub fn walls(&mut self, x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32, state: &BlockState) {
        let (x_min, x_max) = (x1.min(x2), x1.max(x2));
        let (y_min, y_max) = (y1.min(y2), y1.max(y2));
        let (z_min, z_max) = (z1.min(z2), z1.max(z2));

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                self.set(x, y, z_min, state.clone());
                self.set(x, y, z_max, state.clone());
            }
            for z in z_min..=z_max {
                self.set(x_min, y, z, state.clone());
                self.set(x_max, y, z, state.clone());
            }
        }
    }

    /// Places a chest (or trapped chest) facing `facing` and records its
    /// inventory as a block entity. A placement outside the grid is a
    /// silent no-op, matching `set`.
    pub fn add_container(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        facing: Facing,
        items: Vec<ItemSlot>,
        kind: ContainerKind,
    ) {
        if self.index(x, y, z).is_none() {
            return;
        }
        let state = BlockState::with_properties(kind.block_id(), &[("facing", facing.as_str())]);
        self.set(x, y, z, state);
        self.block_entities
            .push(BlockEntity::container(kind.entity_id(), x, y, z, items));
    }

    /// Places a wall sign facing `facing` with up to 4 lines of text; missing
    /// lines become empty strings, extra lines are discarded. A placement
    /// outside the grid is a silent no-op, matching `set`.
    pub fn add_sign(&mut self, x: i32, y: i32, z: i32, facing: Facing, lines: &[String]) {
        if self.index(x, y, z).is_none() {
            return;
        }
        let state = BlockState::with_properties(WALL_SIGN_BLOCK, &[("facing", facing.as_str())]);
        self.set(x, y, z, state);
        self.block_entities
            .push(BlockEntity::sign(x, y, z, pad_sign_lines(lines)));
    }

    /// Appends an already-built block entity record without touching the
    /// block store. Used when reconstructing a grid from a parsed file.
    pub fn push_block_entity(&mut self, entity: BlockEntity) {
        self.block_entities.push(entity);
    }

    /// Replaces the whole block store from a flat state sequence in grid
    /// order, resetting the palette (air back to ID 0, then first-encounter
    /// numbering) and clearing block entities. Fails without modifying
    /// anything if the input length is not `width * height * length`.
    pub fn load_from_array(&mut self, states: Vec<BlockState>) -> Result<()> {
        if states.len() != self.total_cells() {
            return Err(CraftmaticError::GridError(format!(
                "expected {} block states, got {}",
                self.total_cells(),
                states.len()
            )));
        }

        let mut palette = Palette::new();
        let blocks = states
            .iter()
            .map(|state| palette.id_for_state(state))
            .collect();

        self.palette = palette;
        self.blocks = blocks;
        self.block_entities.clear();
        Ok(())
    }

    pub fn count_non_air(&self) -> usize {
        self.blocks.iter().filter(|&&id| id != AIR_ID).count()
    }

    pub fn dimensions(&self) -> (i32, i32, i32) {
        (self.width, self.height, self.length)
    }

    pub fn total_cells(&self) -> usize {
        self.blocks.len()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The dense per-cell palette IDs in flat grid order.
    pub fn block_ids(&self) -> &[u32] {
        &self.blocks
    }

    pub fn block_entities(&self) -> &[BlockEntity] {
        &self.block_entities
    }

    /// Read-only projection indexable by `[y][z][x]`, for renderers and
    /// viewers.
    pub fn to_3d_array(&self) -> Vec<Vec<Vec<BlockState>>> {
        (0..self.height)
            .map(|y| {
                (0..self.length)
                    .map(|z| {
                        (0..self.width)
                            .map(|x| self.get(x, y, z).clone())
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }
}

/// Normalizes one axis of a box to (min, max) and clamps it to [0, dim).
fn clamped_axis(a: i32, b: i32, dim: i32) -> (i32, i32) {
    (a.min(b).max(0), a.max(b).min(dim - 1))
}
