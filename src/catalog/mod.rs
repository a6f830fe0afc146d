//! List commands and their load state.
//!
//! A [`CatalogView`] starts in [`ViewState::Loading`], performs exactly one
//! fetch and ends in either [`ViewState::Loaded`] or [`ViewState::Error`].
//! There is no retry; a new view is needed to fetch again.

pub mod grid;

pub use grid::{Grid, GridEntry, GridSection, KindFilter, EMPTY_VIEW_TITLE};

use jellygrid_common::{Error, ItemId, ItemKind, MediaItem};
use serde::Serialize;

use crate::client::{CatalogApi, CatalogClient};

/// Sections of the movies & series grid, in display order.
pub const MEDIA_SECTIONS: [ItemKind; 2] = [ItemKind::Movie, ItemKind::Series];

pub const TOAST_TITLE: &str = "Jellyfin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToastStyle {
    Animated,
    Success,
    Failure,
}

/// A transient notification shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(title: &str, message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            style,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.style == ToastStyle::Failure
    }
}

/// What the error screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    /// Short message, also used for the failure toast.
    pub message: String,
    /// Markdown help for classified errors.
    pub help: Option<&'static str>,
}

impl ErrorView {
    pub fn from_error(error: &Error) -> Self {
        Self {
            message: error.to_string(),
            help: error.help(),
        }
    }

    /// Primary content: the help text when there is one, else the message.
    pub fn markdown(&self) -> &str {
        self.help.unwrap_or(&self.message)
    }

    /// Classified errors offer a shortcut into the configuration.
    pub fn offers_config_shortcut(&self) -> bool {
        self.help.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(ErrorView),
    Loaded(Vec<MediaItem>),
}

/// The list commands the launcher offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Movies and series, sectioned by kind.
    MoviesAndSeries,
    /// All collections, unsectioned.
    Collections,
    /// Movies and series inside one collection.
    Collection(ItemId),
}

impl Listing {
    pub fn kinds(&self) -> &'static [ItemKind] {
        match self {
            Self::MoviesAndSeries | Self::Collection(_) => &MEDIA_SECTIONS,
            Self::Collections => &[ItemKind::BoxSet],
        }
    }

    pub fn parent_id(&self) -> Option<&ItemId> {
        match self {
            Self::Collection(id) => Some(id),
            _ => None,
        }
    }

    /// Sections to group by, `None` for a flat grid.
    pub fn sections(&self) -> Option<&'static [ItemKind]> {
        match self {
            Self::Collections => None,
            _ => Some(&MEDIA_SECTIONS),
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Self::Collections => "Collections",
            _ => "Media Files",
        }
    }
}

pub struct CatalogView {
    listing: Listing,
    state: ViewState,
    toast: Toast,
}

impl CatalogView {
    pub fn new(listing: Listing) -> Self {
        Self {
            listing,
            state: ViewState::Loading,
            toast: Toast::new(TOAST_TITLE, "Fetching Media Items...", ToastStyle::Animated),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Run the one fetch of this view. Calling it again is a no-op.
    pub async fn load(&mut self, api: &dyn CatalogApi) -> &ViewState {
        if !self.is_loading() {
            return &self.state;
        }

        let result = api
            .fetch_items(self.listing.kinds(), self.listing.parent_id())
            .await;

        match result {
            Ok(items) => {
                tracing::info!("Loaded {} {}", items.len(), self.listing.noun());
                self.toast = Toast::new(
                    TOAST_TITLE,
                    format!("Loaded {} {}", items.len(), self.listing.noun()),
                    ToastStyle::Success,
                );
                self.state = ViewState::Loaded(items);
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", self.listing.noun(), e);
                let view = ErrorView::from_error(&e);
                self.toast = Toast::new(TOAST_TITLE, view.message.clone(), ToastStyle::Failure);
                self.state = ViewState::Error(view);
            }
        }

        &self.state
    }

    /// Lay out the loaded items. `None` unless the view is loaded.
    pub fn grid(&self, filter: KindFilter, columns: u8, client: &CatalogClient) -> Option<Grid> {
        let ViewState::Loaded(items) = &self.state else {
            return None;
        };

        let grid = match self.listing.sections() {
            Some(sections) => Grid::sectioned(items, sections, filter, columns, client),
            None => Grid::flat(items, columns, client),
        };
        Some(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jellygrid_common::{Result, ServerId, StatusHint};
    use std::sync::Mutex;

    /// Records calls and answers with a canned result.
    struct FakeApi {
        calls: Mutex<Vec<(Vec<ItemKind>, Option<ItemId>)>>,
        status: Option<u16>,
        items: Vec<MediaItem>,
    }

    impl FakeApi {
        fn ok(items: Vec<MediaItem>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                status: None,
                items,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                status: Some(status),
                items: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl CatalogApi for FakeApi {
        async fn fetch_items(
            &self,
            kinds: &[ItemKind],
            parent_id: Option<&ItemId>,
        ) -> Result<Vec<MediaItem>> {
            self.calls
                .lock()
                .unwrap()
                .push((kinds.to_vec(), parent_id.cloned()));
            match self.status {
                Some(status) => Err(Error::from_status(status)),
                None => Ok(self.items.clone()),
            }
        }

        async fn set_favorite(&self, _item_id: &ItemId, _favorite: bool) -> Result<()> {
            unreachable!("not used by list views")
        }
    }

    fn item(id: &str, kind: ItemKind) -> MediaItem {
        MediaItem {
            id: ItemId::from(id),
            server_id: ServerId::from("srv"),
            name: id.to_string(),
            kind,
            production_year: None,
            community_rating: None,
            image_tags: Default::default(),
            user_data: Default::default(),
        }
    }

    #[test]
    fn new_view_is_loading() {
        let view = CatalogView::new(Listing::MoviesAndSeries);
        assert!(view.is_loading());
        assert_eq!(view.toast().style, ToastStyle::Animated);
        assert_eq!(view.toast().message, "Fetching Media Items...");
    }

    #[test]
    fn listing_parameters() {
        assert_eq!(Listing::MoviesAndSeries.kinds(), &MEDIA_SECTIONS);
        assert_eq!(Listing::Collections.kinds(), &[ItemKind::BoxSet]);
        assert!(Listing::Collections.sections().is_none());

        let drill = Listing::Collection(ItemId::from("abc123"));
        assert_eq!(drill.parent_id().map(ItemId::as_str), Some("abc123"));
        assert_eq!(drill.kinds(), &MEDIA_SECTIONS);
    }

    #[tokio::test]
    async fn load_success() {
        let api = FakeApi::ok(vec![item("m1", ItemKind::Movie), item("s1", ItemKind::Series)]);
        let mut view = CatalogView::new(Listing::MoviesAndSeries);

        view.load(&api).await;

        assert!(matches!(view.state(), ViewState::Loaded(items) if items.len() == 2));
        assert_eq!(view.toast().style, ToastStyle::Success);
        assert_eq!(view.toast().message, "Loaded 2 Media Files");
    }

    #[tokio::test]
    async fn load_collections_toast() {
        let api = FakeApi::ok(vec![item("b1", ItemKind::BoxSet)]);
        let mut view = CatalogView::new(Listing::Collections);
        view.load(&api).await;
        assert_eq!(view.toast().message, "Loaded 1 Collections");
    }

    #[tokio::test]
    async fn load_fetches_only_once() {
        let api = FakeApi::ok(vec![]);
        let mut view = CatalogView::new(Listing::Collection(ItemId::from("p1")));

        view.load(&api).await;
        view.load(&api).await;

        let calls = api.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, MEDIA_SECTIONS.to_vec());
        assert_eq!(calls[0].1, Some(ItemId::from("p1")));
    }

    #[tokio::test]
    async fn classified_error_shows_help() {
        let api = FakeApi::failing(401);
        let mut view = CatalogView::new(Listing::MoviesAndSeries);
        view.load(&api).await;

        let ViewState::Error(error) = view.state() else {
            panic!("expected error state");
        };
        assert_eq!(error.message, "Server returned 401");
        assert_eq!(error.help, Some(StatusHint::InvalidApiKey.help()));
        assert_eq!(error.markdown(), StatusHint::InvalidApiKey.help());
        assert!(error.offers_config_shortcut());
        assert!(view.toast().is_failure());
    }

    #[tokio::test]
    async fn generic_error_shows_message() {
        let api = FakeApi::failing(500);
        let mut view = CatalogView::new(Listing::Collections);
        view.load(&api).await;

        let ViewState::Error(error) = view.state() else {
            panic!("expected error state");
        };
        assert_eq!(error.markdown(), "Server returned 500");
        assert!(!error.offers_config_shortcut());
        assert_eq!(view.toast().message, "Server returned 500");
    }

    #[tokio::test]
    async fn grid_only_when_loaded() {
        let mut config = crate::config::Config::default();
        config.server.url = "http://media.local".into();
        let client = CatalogClient::new(&config);

        let mut view = CatalogView::new(Listing::Collections);
        assert!(view.grid(KindFilter::All, 5, &client).is_none());

        view.load(&FakeApi::ok(vec![item("b1", ItemKind::BoxSet)])).await;
        let grid = view.grid(KindFilter::All, 5, &client).unwrap();
        assert_eq!(grid.len(), 1);
        assert!(grid.sections[0].kind.is_none());

        let mut failed = CatalogView::new(Listing::Collections);
        failed.load(&FakeApi::failing(400)).await;
        assert!(failed.grid(KindFilter::All, 5, &client).is_none());
    }
}
