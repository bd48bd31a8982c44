//! The fixed list of selectable colors.

use std::collections::HashSet;

use crate::color::SolidColor;

/// Errors raised while building a palette.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaletteError {
    #[error("swatch {id}: `{value}` is not a hex color code")]
    InvalidHex { id: u32, value: String },
    #[error("swatch id {0} appears more than once")]
    DuplicateId(u32),
    #[error("palette has no swatches")]
    Empty,
}

/// A single selectable color sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    id: u32,
    value: String,
    color: SolidColor,
}

impl Swatch {
    /// Create a swatch from a stable id and a hex color code.
    pub fn new(id: u32, value: impl Into<String>) -> Result<Self, PaletteError> {
        let value = value.into();
        let color = SolidColor::from_hex(&value).ok_or_else(|| PaletteError::InvalidHex {
            id,
            value: value.clone(),
        })?;
        Ok(Self { id, value, color })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// The color code exactly as it was given, e.g. `#ef4444`.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn color(&self) -> SolidColor {
        self.color
    }
}

const DEFAULT_SWATCHES: [(u32, &str); 7] = [
    (1, "#ef4444"), // red
    (2, "#f97316"), // orange
    (3, "#eab308"), // yellow
    (4, "#0ea5e9"), // blue
    (5, "#22c55e"), // green
    (6, "#a855f7"), // purple
    (7, "#171717"), // black
];

/// An ordered, non-empty set of swatches with unique ids.
///
/// The first swatch is the initial selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    pub fn new(swatches: Vec<Swatch>) -> Result<Self, PaletteError> {
        if swatches.is_empty() {
            return Err(PaletteError::Empty);
        }
        let mut seen = HashSet::new();
        for swatch in &swatches {
            if !seen.insert(swatch.id) {
                return Err(PaletteError::DuplicateId(swatch.id));
            }
        }
        Ok(Self { swatches })
    }

    /// Build from `(id, hex)` pairs.
    pub fn from_hex(entries: &[(u32, &str)]) -> Result<Self, PaletteError> {
        let swatches = entries
            .iter()
            .map(|&(id, value)| Swatch::new(id, value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(swatches)
    }

    /// The swatch selected before any click.
    pub fn initial(&self) -> &Swatch {
        &self.swatches[0]
    }

    pub fn get(&self, id: u32) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, swatch: &Swatch) -> bool {
        self.swatches.iter().any(|s| s == swatch)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        let swatches = DEFAULT_SWATCHES
            .iter()
            .map(|&(id, value)| Swatch {
                id,
                value: value.to_string(),
                color: SolidColor::from_hex(value).unwrap_or_default(),
            })
            .collect();
        Self { swatches }
    }
}
