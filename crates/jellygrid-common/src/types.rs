//! Catalog item types as the media server sends them.
//!
//! Field names follow the server's PascalCase JSON. Optional numbers are
//! omitted or zero when the server does not know them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{ItemId, ServerId};

/// Kind of catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// A single movie.
    Movie,
    /// A TV series.
    Series,
    /// A named collection grouping other items.
    BoxSet,
}

impl ItemKind {
    /// All kinds, in section order.
    pub const ALL: [ItemKind; 3] = [Self::Movie, Self::Series, Self::BoxSet];

    /// The name the server uses in `IncludeItemTypes` and `Type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
            Self::BoxSet => "BoxSet",
        }
    }

    /// Join kinds with `,` in the order given.
    pub fn join(kinds: &[ItemKind]) -> String {
        kinds
            .iter()
            .map(ItemKind::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" => Ok(Self::Movie),
            "series" | "show" | "shows" => Ok(Self::Series),
            "boxset" | "collection" | "collections" => Ok(Self::BoxSet),
            _ => Err(format!("Unknown item kind: {}", s)),
        }
    }
}

/// Image tags attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageTags {
    /// Cache-busting tag of the primary (cover) image.
    #[serde(default)]
    pub primary: Option<String>,
}

/// Per-user state the server tracks for an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserData {
    #[serde(default)]
    pub played: bool,

    #[serde(default)]
    pub is_favorite: bool,
}

/// A single catalog entry returned by the items endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaItem {
    pub id: ItemId,

    #[serde(default)]
    pub server_id: ServerId,

    pub name: String,

    #[serde(rename = "Type")]
    pub kind: ItemKind,

    #[serde(default)]
    pub production_year: Option<i32>,

    #[serde(default)]
    pub community_rating: Option<f64>,

    #[serde(default)]
    pub image_tags: ImageTags,

    #[serde(default)]
    pub user_data: UserData,
}

impl MediaItem {
    /// Tag of the primary image, empty when the item has none.
    pub fn primary_image_tag(&self) -> &str {
        self.image_tags.primary.as_deref().unwrap_or("")
    }

    pub fn played(&self) -> bool {
        self.user_data.played
    }

    pub fn is_favorite(&self) -> bool {
        self.user_data.is_favorite
    }
}
