use crate::varint::{read_varint, write_varint};
use craftmatic_common::{CraftmaticError, Result};
use craftmatic_grid::block_entity::SIGN_LINES;
use craftmatic_grid::{BlockEntity, BlockEntityKind, BlockState, Grid, ItemSlot};
use craftmatic_logger::{log, LogSeverity};
use craftmatic_nbt::{NbtFile, Tag};
use std::collections::HashMap;
use std::io::{Read, Write};

/// Structural version of the schematic schema this crate writes.
pub const SCHEMATIC_VERSION: i32 = 2;

/// Default target-game data version: Minecraft 1.20.1. Overridable per write
/// via [`Schematic::from_grid_with_data_version`].
pub const DEFAULT_DATA_VERSION: i32 = 3465;

/// Name of the root compound of every schematic document.
pub const ROOT_NAME: &str = "Schematic";

const SIGN_COLOR: &str = "black";

/// Value-type projection of a [`Grid`] plus format metadata. This is the
/// unit mapped to and from the tagged-tree document; it decouples the
/// in-memory grid from the on-disk schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    pub version: i32,
    pub data_version: i32,
    pub width: i16,
    pub height: i16,
    pub length: i16,
    pub offset: [i32; 3],
    /// Palette snapshot as (canonical block state string, ID), in ID order.
    pub palette: Vec<(String, i32)>,
    /// One varint per cell, each carrying the cell's palette ID, in flat
    /// grid order.
    pub block_data: Vec<u8>,
    pub block_entities: Vec<BlockEntity>,
}

impl Schematic {
    pub fn from_grid(grid: &Grid) -> Result<Schematic> {
        Self::from_grid_with_data_version(grid, DEFAULT_DATA_VERSION)
    }

    pub fn from_grid_with_data_version(grid: &Grid, data_version: i32) -> Result<Schematic> {
        let (width, height, length) = grid.dimensions();
        for (axis, dim) in [("width", width), ("height", height), ("length", length)] {
            if dim > i16::MAX as i32 {
                return Err(CraftmaticError::SchemaError(format!(
                    "{} {} exceeds the format's 16-bit dimension range",
                    axis, dim
                )));
            }
        }

        let mut block_data = Vec::with_capacity(grid.total_cells());
        for &id in grid.block_ids() {
            write_varint(&mut block_data, id);
        }

        let palette = grid
            .palette()
            .iter()
            .map(|(state, id)| (state.to_string(), id as i32))
            .collect();

        Ok(Schematic {
            version: SCHEMATIC_VERSION,
            data_version,
            width: width as i16,
            height: height as i16,
            length: length as i16,
            offset: [0, 0, 0],
            palette,
            block_data,
            block_entities: grid.block_entities().to_vec(),
        })
    }

    /// Builds the tagged-tree document, emitting fields in the canonical
    /// order third-party tools expect.
    pub fn to_nbt(&self) -> NbtFile {
        let mut root: Vec<(String, Tag)> = vec![
            ("Version".to_string(), Tag::Int(self.version)),
            ("DataVersion".to_string(), Tag::Int(self.data_version)),
            ("Width".to_string(), Tag::Short(self.width)),
            ("Height".to_string(), Tag::Short(self.height)),
            ("Length".to_string(), Tag::Short(self.length)),
            ("Offset".to_string(), Tag::IntArray(self.offset.to_vec())),
            ("PaletteMax".to_string(), Tag::Int(self.palette.len() as i32)),
        ];

        let palette = self
            .palette
            .iter()
            .map(|(name, id)| (name.clone(), Tag::Int(*id)))
            .collect();
        root.push(("Palette".to_string(), Tag::Compound(palette)));

        root.push((
            "BlockData".to_string(),
            Tag::ByteArray(self.block_data.iter().map(|&b| b as i8).collect()),
        ));

        if !self.block_entities.is_empty() {
            root.push((
                "BlockEntities".to_string(),
                Tag::List(self.block_entities.iter().map(block_entity_to_nbt).collect()),
            ));
        }

        NbtFile::new(ROOT_NAME.to_string(), Tag::Compound(root))
    }

    /// Schema-directed extraction from a parsed document. Reports a schema
    /// error for any required field that is missing or mis-typed; readers do
    /// not assume field order.
    pub fn from_nbt(file: &NbtFile) -> Result<Schematic> {
        let root = &file.root;
        if root.as_compound().is_none() {
            return Err(CraftmaticError::SchemaError(
                "root tag must be a compound".to_string(),
            ));
        }

        let version = require_i32(root, "Version")?;
        let data_version = require_i32(root, "DataVersion")?;
        let width = require_i16(root, "Width")?;
        let height = require_i16(root, "Height")?;
        let length = require_i16(root, "Length")?;

        let offset = match root.get("Offset") {
            None => [0, 0, 0],
            Some(tag) => {
                let ints = tag.as_int_array().ok_or_else(|| mistyped("Offset", "IntArray"))?;
                match ints {
                    [x, y, z] => [*x, *y, *z],
                    _ => {
                        return Err(CraftmaticError::SchemaError(format!(
                            "field 'Offset' holds {} ints, expected 3",
                            ints.len()
                        )))
                    }
                }
            }
        };

        // Present in canonical output but redundant with the palette itself.
        if let Some(tag) = root.get("PaletteMax") {
            tag.as_i32().ok_or_else(|| mistyped("PaletteMax", "Int"))?;
        }

        let palette_tag = require(root, "Palette")?;
        let palette_entries = palette_tag
            .as_compound()
            .ok_or_else(|| mistyped("Palette", "Compound"))?;
        let mut palette = Vec::with_capacity(palette_entries.len());
        for (name, tag) in palette_entries {
            let id = tag.as_i32().ok_or_else(|| {
                CraftmaticError::SchemaError(format!(
                    "palette entry '{}' is not an Int",
                    name
                ))
            })?;
            palette.push((name.clone(), id));
        }

        let block_data = require(root, "BlockData")?
            .as_byte_array()
            .ok_or_else(|| mistyped("BlockData", "ByteArray"))?
            .iter()
            .map(|&b| b as u8)
            .collect();

        let mut block_entities = Vec::new();
        if let Some(tag) = root.get("BlockEntities") {
            let list = tag
                .as_list()
                .ok_or_else(|| mistyped("BlockEntities", "List"))?;
            for entry in list {
                if let Some(entity) = block_entity_from_nbt(entry)? {
                    block_entities.push(entity);
                }
            }
        }

        log(
            format!(
                "parsed schematic {}x{}x{}, {} palette entries, {} block entities",
                width,
                height,
                length,
                palette.len(),
                block_entities.len()
            ),
            LogSeverity::Debug,
        );

        Ok(Schematic {
            version,
            data_version,
            width,
            height,
            length,
            offset,
            palette,
            block_data,
            block_entities,
        })
    }

    /// Decodes the block stream back into a grid: exactly
    /// `width * height * length` varints, each resolved through the parsed
    /// palette, then a wholesale rebuild plus re-attached block entities.
    pub fn to_grid(&self) -> Result<Grid> {
        if self.width < 1 || self.height < 1 || self.length < 1 {
            return Err(CraftmaticError::SchemaError(format!(
                "non-positive dimensions {}x{}x{}",
                self.width, self.height, self.length
            )));
        }
        let width = self.width as i32;
        let height = self.height as i32;
        let length = self.length as i32;

        let mut states_by_id: HashMap<i32, BlockState> = HashMap::with_capacity(self.palette.len());
        for (name, id) in &self.palette {
            if *id < 0 {
                return Err(CraftmaticError::SchemaError(format!(
                    "palette entry '{}' has negative id {}",
                    name, id
                )));
            }
            if states_by_id.insert(*id, BlockState::parse(name)?).is_some() {
                return Err(CraftmaticError::SchemaError(format!(
                    "palette id {} assigned twice",
                    id
                )));
            }
        }

        let total = width as usize * height as usize * length as usize;
        let mut states = Vec::with_capacity(total);
        let mut offset = 0usize;
        for _ in 0..total {
            let (id, consumed) = read_varint(&self.block_data, offset)?;
            offset += consumed;
            let state = states_by_id.get(&(id as i32)).ok_or_else(|| {
                CraftmaticError::FormatError(format!(
                    "block data references unknown palette id {}",
                    id
                ))
            })?;
            states.push(state.clone());
        }
        if offset != self.block_data.len() {
            return Err(CraftmaticError::FormatError(format!(
                "{} trailing bytes after block data stream",
                self.block_data.len() - offset
            )));
        }

        let mut grid = Grid::new(width, height, length);
        grid.load_from_array(states)?;
        for entity in &self.block_entities {
            grid.push_block_entity(entity.clone());
        }
        Ok(grid)
    }

    /// Serializes the uncompressed tree bytes, a valid encoding in its own
    /// right for in-memory or network use.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.to_nbt().write(&mut buffer)?;
        Ok(buffer)
    }

    pub fn from_bytes(mut bytes: &[u8]) -> Result<Schematic> {
        let file = NbtFile::read(&mut bytes)?;
        Self::from_nbt(&file)
    }

    /// Writes the gzip-compressed document, the on-disk framing.
    pub fn write_gzip<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.to_nbt().write_gzip(writer)?;
        Ok(())
    }

    pub fn read_gzip<R: Read>(reader: &mut R) -> Result<Schematic> {
        let file = NbtFile::read_gzip(reader)?;
        Self::from_nbt(&file)
    }

    pub fn to_gzip_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_gzip(&mut buffer)?;
        Ok(buffer)
    }
}

fn require<'a>(root: &'a Tag, name: &str) -> Result<&'a Tag> {
    root.get(name).ok_or_else(|| {
        CraftmaticError::SchemaError(format!("missing required field '{}'", name))
    })
}

fn mistyped(name: &str, expected: &str) -> CraftmaticError {
    CraftmaticError::SchemaError(format!("field '{}' is not a {}", name, expected))
}

fn require_i32(root: &Tag, name: &str) -> Result<i32> {
    require(root, name)?
        .as_i32()
        .ok_or_else(|| mistyped(name, "Int"))
}

fn require_i16(root: &Tag, name: &str) -> Result<i16> {
    require(root, name)?
        .as_i16()
        .ok_or_else(|| mistyped(name, "Short"))
}

fn require_str<'a>(root: &'a Tag, name: &str) -> Result<&'a str> {
    require(root, name)?
        .as_str()
        .ok_or_else(|| mistyped(name, "String"))
}

/// Wraps one line of sign text in the JSON text-component form the game
/// stores, e.g. `{"text":"Craftmatic"}`.
fn json_line(line: &str) -> String {
    serde_json::json!({ "text": line }).to_string()
}

/// Inverts `json_line`, tolerating plain-string components and raw
/// unwrapped text from older writers.
fn parse_json_line(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::String(line)) => line,
        Ok(value) => value
            .get("text")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn empty_lines() -> [String; SIGN_LINES] {
    std::array::from_fn(|_| String::new())
}

fn sign_side_to_nbt(lines: &[String; SIGN_LINES]) -> Tag {
    Tag::Compound(vec![
        (
            "messages".to_string(),
            Tag::List(lines.iter().map(|line| Tag::String(json_line(line))).collect()),
        ),
        ("color".to_string(), Tag::String(SIGN_COLOR.to_string())),
        ("has_glowing_text".to_string(), Tag::Byte(0)),
    ])
}

fn sign_side_from_nbt(side: &Tag) -> Result<[String; SIGN_LINES]> {
    let messages = require(side, "messages")?
        .as_list()
        .ok_or_else(|| mistyped("messages", "List"))?;

    let mut lines = empty_lines();
    for (i, message) in messages.iter().take(SIGN_LINES).enumerate() {
        let raw = message
            .as_str()
            .ok_or_else(|| mistyped("messages", "List of Strings"))?;
        lines[i] = parse_json_line(raw);
    }
    Ok(lines)
}

fn block_entity_to_nbt(entity: &BlockEntity) -> Tag {
    let mut fields: Vec<(String, Tag)> = vec![
        ("Id".to_string(), Tag::String(entity.id.clone())),
        (
            "Pos".to_string(),
            Tag::IntArray(vec![entity.x, entity.y, entity.z]),
        ),
    ];

    match &entity.kind {
        BlockEntityKind::Container { items } => {
            let items = items
                .iter()
                .map(|item| {
                    Tag::Compound(vec![
                        ("Slot".to_string(), Tag::Byte(item.slot as i8)),
                        ("id".to_string(), Tag::String(item.id.clone())),
                        ("Count".to_string(), Tag::Byte(item.count as i8)),
                    ])
                })
                .collect();
            fields.push(("Items".to_string(), Tag::List(items)));
        }
        BlockEntityKind::Sign { lines } => {
            // Modern sign fields plus the flat legacy form, so both older
            // and newer readers find text. The back side is always present,
            // as 4 empty lines.
            fields.push(("front_text".to_string(), sign_side_to_nbt(lines)));
            fields.push(("back_text".to_string(), sign_side_to_nbt(&empty_lines())));
            for (i, line) in lines.iter().enumerate() {
                fields.push((format!("Text{}", i + 1), Tag::String(json_line(line))));
            }
        }
    }

    Tag::Compound(fields)
}

/// Parses one block-entity compound. Returns `Ok(None)` for kinds this core
/// does not model; those are logged and skipped rather than failing the
/// whole document.
fn block_entity_from_nbt(tag: &Tag) -> Result<Option<BlockEntity>> {
    let id = require_str(tag, "Id")?;
    let pos = require(tag, "Pos")?
        .as_int_array()
        .ok_or_else(|| mistyped("Pos", "IntArray"))?;
    let [x, y, z] = match pos {
        [x, y, z] => [*x, *y, *z],
        _ => {
            return Err(CraftmaticError::SchemaError(format!(
                "field 'Pos' holds {} ints, expected 3",
                pos.len()
            )))
        }
    };

    if let Some(items_tag) = tag.get("Items") {
        let list = items_tag
            .as_list()
            .ok_or_else(|| mistyped("Items", "List"))?;
        let mut items = Vec::with_capacity(list.len());
        for item in list {
            let slot = require(item, "Slot")?
                .as_i8()
                .ok_or_else(|| mistyped("Slot", "Byte"))?;
            let item_id = require_str(item, "id")?;
            let count = require(item, "Count")?
                .as_i8()
                .ok_or_else(|| mistyped("Count", "Byte"))?;
            items.push(ItemSlot::new(slot as u8, item_id, count as u8));
        }
        return Ok(Some(BlockEntity::container(id, x, y, z, items)));
    }

    // Prefer the modern sign fields when both forms are present.
    if let Some(front) = tag.get("front_text") {
        let lines = sign_side_from_nbt(front)?;
        return Ok(Some(BlockEntity {
            id: id.to_string(),
            x,
            y,
            z,
            kind: BlockEntityKind::Sign { lines },
        }));
    }

    if tag.get("Text1").is_some() {
        let mut lines = empty_lines();
        for (i, line) in lines.iter_mut().enumerate() {
            if let Some(raw) = tag.get(&format!("Text{}", i + 1)).and_then(Tag::as_str) {
                *line = parse_json_line(raw);
            }
        }
        return Ok(Some(BlockEntity {
            id: id.to_string(),
            x,
            y,
            z,
            kind: BlockEntityKind::Sign { lines },
        }));
    }

    log(
        format!("skipping unsupported block entity '{}' at ({}, {}, {})", id, x, y, z),
        LogSeverity::Warning,
    );
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use craftmatic_common::Facing;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(4, 3, 5);
        grid.fill(0, 0, 0, 3, 0, 4, &BlockState::new("minecraft:stone"));
        grid.set(1, 1, 1, BlockState::new("minecraft:oak_planks"));
        grid
    }

    #[test]
    fn test_from_grid_snapshot() {
        let schematic = Schematic::from_grid(&sample_grid()).unwrap();
        assert_eq!(schematic.version, SCHEMATIC_VERSION);
        assert_eq!(schematic.data_version, DEFAULT_DATA_VERSION);
        assert_eq!(
            (schematic.width, schematic.height, schematic.length),
            (4, 3, 5)
        );
        assert_eq!(schematic.offset, [0, 0, 0]);
        assert_eq!(
            schematic.palette,
            vec![
                ("minecraft:air".to_string(), 0),
                ("minecraft:stone".to_string(), 1),
                ("minecraft:oak_planks".to_string(), 2),
            ]
        );
        // 60 cells with single-byte ids: one varint byte per cell.
        assert_eq!(schematic.block_data.len(), 60);
    }

    #[test]
    fn test_data_version_override() {
        let schematic =
            Schematic::from_grid_with_data_version(&sample_grid(), 2586).unwrap();
        assert_eq!(schematic.data_version, 2586);
    }

    #[test]
    fn test_canonical_field_order() {
        let file = Schematic::from_grid(&sample_grid()).unwrap().to_nbt();
        assert_eq!(file.name, ROOT_NAME);
        let names: Vec<&str> = file
            .root
            .as_compound()
            .unwrap()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Version",
                "DataVersion",
                "Width",
                "Height",
                "Length",
                "Offset",
                "PaletteMax",
                "Palette",
                "BlockData",
            ]
        );
    }

    #[test]
    fn test_block_entities_list_only_when_present() {
        let plain = Schematic::from_grid(&sample_grid()).unwrap().to_nbt();
        assert!(plain.root.get("BlockEntities").is_none());

        let mut grid = sample_grid();
        grid.add_sign(2, 1, 2, Facing::North, &["hi".to_string()]);
        let file = Schematic::from_grid(&grid).unwrap().to_nbt();
        assert_eq!(
            file.root.get("BlockEntities").and_then(Tag::as_list).map(<[Tag]>::len),
            Some(1)
        );
    }

    #[test]
    fn test_sign_written_in_both_forms() {
        let mut grid = Grid::new(3, 3, 3);
        grid.add_sign(1, 1, 1, Facing::West, &["line one".to_string()]);
        let file = Schematic::from_grid(&grid).unwrap().to_nbt();

        let entity = &file.root.get("BlockEntities").unwrap().as_list().unwrap()[0];
        let front = entity.get("front_text").unwrap();
        let messages = front.get("messages").unwrap().as_list().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].as_str(), Some(r#"{"text":"line one"}"#));
        assert_eq!(messages[1].as_str(), Some(r#"{"text":""}"#));
        assert_eq!(front.get("color").unwrap().as_str(), Some("black"));
        assert_eq!(front.get("has_glowing_text").unwrap().as_i8(), Some(0));

        // Back side is always emitted, as empty lines.
        let back = entity.get("back_text").unwrap();
        let back_messages = back.get("messages").unwrap().as_list().unwrap();
        assert!(back_messages
            .iter()
            .all(|m| m.as_str() == Some(r#"{"text":""}"#)));

        // Legacy flat fields.
        assert_eq!(
            entity.get("Text1").unwrap().as_str(),
            Some(r#"{"text":"line one"}"#)
        );
        assert_eq!(entity.get("Text4").unwrap().as_str(), Some(r#"{"text":""}"#));
    }

    #[test]
    fn test_modern_sign_fields_preferred_over_legacy() {
        let entity_tag = Tag::Compound(vec![
            ("Id".to_string(), Tag::String("minecraft:sign".to_string())),
            ("Pos".to_string(), Tag::IntArray(vec![0, 0, 0])),
            (
                "front_text".to_string(),
                sign_side_to_nbt(&[
                    "modern".to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                ]),
            ),
            ("Text1".to_string(), Tag::String(json_line("legacy"))),
        ]);

        let entity = block_entity_from_nbt(&entity_tag).unwrap().unwrap();
        assert_matches!(
            entity.kind,
            BlockEntityKind::Sign { ref lines } if lines[0] == "modern"
        );
    }

    #[test]
    fn test_legacy_only_sign_parsed() {
        let entity_tag = Tag::Compound(vec![
            ("Id".to_string(), Tag::String("minecraft:sign".to_string())),
            ("Pos".to_string(), Tag::IntArray(vec![1, 2, 3])),
            ("Text1".to_string(), Tag::String(json_line("old"))),
            ("Text2".to_string(), Tag::String(json_line("style"))),
        ]);

        let entity = block_entity_from_nbt(&entity_tag).unwrap().unwrap();
        assert_eq!(entity.pos(), (1, 2, 3));
        assert_matches!(
            entity.kind,
            BlockEntityKind::Sign { ref lines }
                if *lines == ["old", "style", "", ""].map(String::from)
        );
    }

    #[test]
    fn test_unknown_block_entity_skipped() {
        let entity_tag = Tag::Compound(vec![
            ("Id".to_string(), Tag::String("minecraft:furnace".to_string())),
            ("Pos".to_string(), Tag::IntArray(vec![0, 0, 0])),
        ]);
        assert_eq!(block_entity_from_nbt(&entity_tag).unwrap(), None);
    }

    #[test]
    fn test_parse_json_line_tolerates_variants() {
        assert_eq!(parse_json_line(r#"{"text":"hello"}"#), "hello");
        assert_eq!(parse_json_line(r#""plain component""#), "plain component");
        assert_eq!(parse_json_line("not json at all"), "not json at all");
        assert_eq!(parse_json_line(r#"{"other":"field"}"#), "");
    }

    #[test]
    fn test_missing_required_field_is_schema_error() {
        let mut file = Schematic::from_grid(&sample_grid()).unwrap().to_nbt();
        if let Tag::Compound(entries) = &mut file.root {
            entries.retain(|(name, _)| name != "Width");
        }
        assert_matches!(
            Schematic::from_nbt(&file),
            Err(CraftmaticError::SchemaError(_))
        );
    }

    #[test]
    fn test_mistyped_required_field_is_schema_error() {
        let mut file = Schematic::from_grid(&sample_grid()).unwrap().to_nbt();
        if let Tag::Compound(entries) = &mut file.root {
            for (name, tag) in entries.iter_mut() {
                if name == "DataVersion" {
                    *tag = Tag::String("3465".to_string());
                }
            }
        }
        assert_matches!(
            Schematic::from_nbt(&file),
            Err(CraftmaticError::SchemaError(_))
        );
    }

    #[test]
    fn test_missing_offset_defaults_to_zero() {
        let mut file = Schematic::from_grid(&sample_grid()).unwrap().to_nbt();
        if let Tag::Compound(entries) = &mut file.root {
            entries.retain(|(name, _)| name != "Offset");
        }
        let schematic = Schematic::from_nbt(&file).unwrap();
        assert_eq!(schematic.offset, [0, 0, 0]);
    }

    #[test]
    fn test_short_block_data_rejected() {
        let mut schematic = Schematic::from_grid(&sample_grid()).unwrap();
        schematic.block_data.truncate(10);
        assert_matches!(
            schematic.to_grid(),
            Err(CraftmaticError::FormatError(_))
        );
    }

    #[test]
    fn test_trailing_block_data_rejected() {
        let mut schematic = Schematic::from_grid(&sample_grid()).unwrap();
        schematic.block_data.push(0x00);
        assert_matches!(
            schematic.to_grid(),
            Err(CraftmaticError::FormatError(_))
        );
    }

    #[test]
    fn test_unknown_palette_id_rejected() {
        let mut schematic = Schematic::from_grid(&sample_grid()).unwrap();
        // Remove the palette entry the block data points at.
        schematic.palette.retain(|(_, id)| *id != 1);
        assert_matches!(
            schematic.to_grid(),
            Err(CraftmaticError::FormatError(_))
        );
    }

    #[test]
    fn test_duplicate_palette_id_rejected() {
        let mut schematic = Schematic::from_grid(&sample_grid()).unwrap();
        schematic.palette.push(("minecraft:dirt".to_string(), 1));
        assert_matches!(
            schematic.to_grid(),
            Err(CraftmaticError::SchemaError(_))
        );
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let grid = Grid::new(40_000, 1, 1);
        assert_matches!(
            Schematic::from_grid(&grid),
            Err(CraftmaticError::SchemaError(_))
        );
    }
}
