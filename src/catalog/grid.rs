//! Grid layout of a loaded catalog.

use jellygrid_common::{ItemId, ItemKind, MediaItem};
use serde::Serialize;

use crate::client::CatalogClient;

/// Title shown when no section has any entry.
pub const EMPTY_VIEW_TITLE: &str = "No Media found on Jellyfin";

const PLAYED_MARK: &str = "✅";
const FAVORITE_MARK: &str = "❤️";

/// Which sections the type dropdown lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(ItemKind),
}

impl KindFilter {
    pub fn allows(&self, kind: ItemKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(k) => *k == kind,
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<ItemKind>().map(Self::Only)
    }
}

/// One tile of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridEntry {
    pub id: ItemId,
    pub title: String,
    pub subtitle: String,
    pub cover_url: String,
    pub details_url: String,
    pub stream_url: String,
    pub favorite: bool,
}

impl GridEntry {
    pub fn new(item: &MediaItem, client: &CatalogClient) -> Self {
        Self {
            id: item.id.clone(),
            title: title(item, item.is_favorite()),
            subtitle: subtitle(item),
            cover_url: client.cover_url(&item.id, item.primary_image_tag()),
            details_url: client.details_url(&item.id, &item.server_id),
            stream_url: client.stream_url(&item.id),
            favorite: item.is_favorite(),
        }
    }
}

/// Display title, prefixed with played / favorite marks.
pub fn title(item: &MediaItem, favorite: bool) -> String {
    let mut prefix = String::new();
    if item.played() {
        prefix.push_str(PLAYED_MARK);
    }
    if favorite {
        prefix.push_str(FAVORITE_MARK);
    }

    if prefix.is_empty() {
        item.name.clone()
    } else {
        format!("{} {}", prefix, item.name)
    }
}

/// `"{year} · {rating}"` with the rating rounded to two decimals.
pub fn subtitle(item: &MediaItem) -> String {
    let year = item.production_year.unwrap_or(0);
    let rating = (item.community_rating.unwrap_or(0.0) * 100.0).round() / 100.0;
    format!("{} · {}", year, rating)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSection {
    /// `None` for an unsectioned grid.
    pub kind: Option<ItemKind>,
    pub entries: Vec<GridEntry>,
}

impl GridSection {
    pub fn title(&self) -> Option<&'static str> {
        self.kind.map(|k| k.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub columns: u8,
    pub sections: Vec<GridSection>,
}

impl Grid {
    /// Group `items` into one section per kind in `sections`, keeping fetch
    /// order inside each section. Sections the filter rejects are dropped.
    pub fn sectioned(
        items: &[MediaItem],
        sections: &[ItemKind],
        filter: KindFilter,
        columns: u8,
        client: &CatalogClient,
    ) -> Self {
        let sections = sections
            .iter()
            .copied()
            .filter(|kind| filter.allows(*kind))
            .map(|kind| GridSection {
                kind: Some(kind),
                entries: items
                    .iter()
                    .filter(|item| item.kind == kind)
                    .map(|item| GridEntry::new(item, client))
                    .collect(),
            })
            .collect();

        Self { columns, sections }
    }

    /// Every item in one section, in fetch order.
    pub fn flat(items: &[MediaItem], columns: u8, client: &CatalogClient) -> Self {
        Self {
            columns,
            sections: vec![GridSection {
                kind: None,
                entries: items
                    .iter()
                    .map(|item| GridEntry::new(item, client))
                    .collect(),
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use jellygrid_common::{ImageTags, ServerId, UserData};

    fn client() -> CatalogClient {
        let mut config = Config::default();
        config.server.url = "http://media.local".into();
        config.server.user_id = "u".into();
        config.server.api_key = "k".into();
        CatalogClient::new(&config)
    }

    fn item(id: &str, name: &str, kind: ItemKind) -> MediaItem {
        MediaItem {
            id: ItemId::from(id),
            server_id: ServerId::from("srv"),
            name: name.to_string(),
            kind,
            production_year: Some(2010),
            community_rating: Some(8.367),
            image_tags: ImageTags {
                primary: Some(format!("tag-{id}")),
            },
            user_data: UserData::default(),
        }
    }

    #[test]
    fn title_marks() {
        let mut it = item("1", "Heat", ItemKind::Movie);
        assert_eq!(title(&it, false), "Heat");
        assert_eq!(title(&it, true), "❤️ Heat");
        it.user_data.played = true;
        assert_eq!(title(&it, false), "✅ Heat");
        assert_eq!(title(&it, true), "✅❤️ Heat");
    }

    #[test]
    fn subtitle_rounds_rating() {
        let it = item("1", "Heat", ItemKind::Movie);
        assert_eq!(subtitle(&it), "2010 · 8.37");

        let mut whole = item("2", "Ronin", ItemKind::Movie);
        whole.community_rating = Some(7.0);
        assert_eq!(subtitle(&whole), "2010 · 7");

        let mut unknown = item("3", "Unknown", ItemKind::Movie);
        unknown.production_year = None;
        unknown.community_rating = None;
        assert_eq!(subtitle(&unknown), "0 · 0");
    }

    #[test]
    fn entry_links() {
        let entry = GridEntry::new(&item("42", "Heat", ItemKind::Movie), &client());
        assert_eq!(
            entry.cover_url,
            "http://media.local/Items/42/Images/Primary?fillHeight=600&fillWidth=400&quality=97&tag=tag-42"
        );
        assert_eq!(entry.stream_url, "http://media.local/Items/42/Download?ApiKey=k");
        assert_eq!(
            entry.details_url,
            "http://media.local/web/index.html#!/details?id=42&serverId=srv"
        );
    }

    #[test]
    fn sections_group_by_kind_in_order() {
        let items = vec![
            item("s1", "Alias", ItemKind::Series),
            item("m1", "Blade", ItemKind::Movie),
            item("s2", "Chuck", ItemKind::Series),
            item("m2", "Dune", ItemKind::Movie),
        ];
        let grid = Grid::sectioned(
            &items,
            &[ItemKind::Movie, ItemKind::Series],
            KindFilter::All,
            5,
            &client(),
        );

        assert_eq!(grid.sections.len(), 2);
        assert_eq!(grid.sections[0].title(), Some("Movie"));
        let movies: Vec<&str> = grid.sections[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(movies, vec!["m1", "m2"]);
        let series: Vec<&str> = grid.sections[1].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(series, vec!["s1", "s2"]);
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn filter_drops_sections() {
        let items = vec![
            item("s1", "Alias", ItemKind::Series),
            item("m1", "Blade", ItemKind::Movie),
        ];
        let grid = Grid::sectioned(
            &items,
            &[ItemKind::Movie, ItemKind::Series],
            KindFilter::Only(ItemKind::Series),
            5,
            &client(),
        );
        assert_eq!(grid.sections.len(), 1);
        assert_eq!(grid.sections[0].kind, Some(ItemKind::Series));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn flat_grid_and_empty() {
        let grid = Grid::flat(&[item("b1", "Alien", ItemKind::BoxSet)], 3, &client());
        assert_eq!(grid.sections.len(), 1);
        assert_eq!(grid.sections[0].title(), None);
        assert!(!grid.is_empty());

        assert!(Grid::flat(&[], 3, &client()).is_empty());
    }

    #[test]
    fn kind_filter_from_str() {
        assert_eq!("all".parse::<KindFilter>().unwrap(), KindFilter::All);
        assert_eq!(
            "movie".parse::<KindFilter>().unwrap(),
            KindFilter::Only(ItemKind::Movie)
        );
        assert!("music".parse::<KindFilter>().is_err());
    }
}
