use craftmatic_common::{CraftmaticError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The distinguished empty/default block.
pub const AIR_NAME: &str = "minecraft:air";

static AIR: Lazy<BlockState> = Lazy::new(|| BlockState::new(AIR_NAME));

/// A block identity plus its named property values (facing, half, ...).
///
/// Properties are held sorted by key, so two states built with the same
/// properties in different orders compare and hash equal. The canonical
/// string form `name[key=value,...]` is only derived for the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState {
    name: String,
    properties: Vec<(String, String)>,
}

impl BlockState {
    pub fn new(name: impl Into<String>) -> Self {
        BlockState {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_properties(name: impl Into<String>, properties: &[(&str, &str)]) -> Self {
        let mut properties: Vec<(String, String)> = properties
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        properties.sort();
        BlockState {
            name: name.into(),
            properties,
        }
    }

    pub fn air() -> Self {
        AIR.clone()
    }

    pub fn is_air(&self) -> bool {
        *self == *AIR
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(property_key, _)| property_key == key)
            .map(|(_, value)| value.as_str())
    }

    /// Parses the canonical string form back into a state.
    ///
    /// Accepts `minecraft:stone` and `minecraft:oak_door[facing=east,half=lower]`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(invalid(text));
        }

        let Some(open) = text.find('[') else {
            return Ok(BlockState::new(text));
        };

        let name = &text[..open];
        let rest = &text[open + 1..];
        if name.is_empty() || !rest.ends_with(']') {
            return Err(invalid(text));
        }

        let body = &rest[..rest.len() - 1];
        let mut properties = Vec::new();
        if !body.is_empty() {
            for pair in body.split(',') {
                let Some((key, value)) = pair.split_once('=') else {
                    return Err(invalid(text));
                };
                if key.is_empty() {
                    return Err(invalid(text));
                }
                properties.push((key.to_string(), value.to_string()));
            }
        }
        properties.sort();

        Ok(BlockState {
            name: name.to_string(),
            properties,
        })
    }
}

fn invalid(text: &str) -> CraftmaticError {
    CraftmaticError::FormatError(format!("invalid block state '{}'", text))
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.properties.is_empty() {
            write!(f, "[")?;
            for (i, (key, value)) in self.properties.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
