//! Landscape definition data structures.
//!
//! A landscape is a two-dimensional matrix: layers are rows, domains are
//! columns, and each domain carries entries that attach bullet content and
//! optional thumbnails to one layer. All structures are immutable after
//! deserialization; rendering never mutates the model.

use serde::{Deserialize, Deserializer, Serialize};

/// A complete landscape definition: the two category axes of the matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landscape {
    /// Row categories, in display order (top to bottom).
    pub layers: Vec<Layer>,
    /// Column categories, in display order (left to right).
    pub domains: Vec<Domain>,
}

/// A row category. Identity is `id`; `name` is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Stable identifier referenced by `Entry::layer`.
    pub id: String,
    /// Display name shown in the rotated legend.
    pub name: String,
}

/// A column category with its content entries.
///
/// Domain order determines both horizontal position and base color
/// assignment (domain index modulo the palette size).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    /// Display name shown in the domain header band.
    pub name: String,
    /// Content entries, in config order.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// A bundle of bullet content and optional thumbnails attached to one
/// domain at one layer.
///
/// `tools` and `controls` accept either a single YAML scalar or a sequence;
/// `image` additionally accepts a comma-joined string of asset names. All
/// three normalize to lists at deserialize time and default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Id of the layer this entry belongs to. Entries referencing an
    /// unknown layer are excluded from every cell without error.
    pub layer: String,
    /// Tool bullet items.
    #[serde(default, deserialize_with = "string_or_list")]
    pub tools: Vec<String>,
    /// Control bullet items.
    #[serde(default, deserialize_with = "string_or_list")]
    pub controls: Vec<String>,
    /// Thumbnail asset names, without directory or extension.
    #[serde(default, rename = "image", deserialize_with = "image_names")]
    pub images: Vec<String>,
}

impl Entry {
    /// Number of countable items (tools + controls) in this entry.
    ///
    /// Images do not contribute to the density count.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.tools.len() + self.controls.len()
    }
}

impl Domain {
    /// Entries belonging to the given layer, in config order.
    pub fn entries_for<'a>(&'a self, layer_id: &'a str) -> impl Iterator<Item = &'a Entry> {
        self.entries.iter().filter(move |e| e.layer == layer_id)
    }

    /// Aggregate item count for the (self, layer) cell.
    #[must_use]
    pub fn cell_item_count(&self, layer_id: &str) -> usize {
        self.entries_for(layer_id).map(Entry::item_count).sum()
    }
}

impl Landscape {
    /// Maximum cell item count across the entire matrix, floored at 1.
    ///
    /// Computed as an explicit pre-pass before any drawing so intensity
    /// scaling is a pure function of (count, max).
    #[must_use]
    pub fn max_item_count(&self) -> usize {
        let mut max = 1;
        for domain in &self.domains {
            for layer in &self.layers {
                max = max.max(domain.cell_item_count(&layer.id));
            }
        }
        max
    }
}

/// Accepts a bare scalar or a sequence of scalars.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => vec![s],
        StringOrList::Many(v) => v,
    })
}

fn image_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        // A scalar may be a single name or a comma-joined list of names.
        StringOrList::One(s) => s
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        StringOrList::Many(v) => v.into_iter().map(|name| name.trim().to_string()).collect(),
    })
}
