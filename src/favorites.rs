//! Favorite toggling with a locally displayed flag.
//!
//! The displayed flag only changes after the server accepted the mutation.
//! A failed request leaves it at its previous value.

use jellygrid_common::ItemId;

use crate::catalog::{Toast, ToastStyle};
use crate::client::CatalogApi;

const TOAST_TITLE: &str = "❤️";

/// One item's favorite flag as the grid shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    item_id: ItemId,
    name: String,
    displayed: bool,
}

impl FavoriteToggle {
    pub fn new(item_id: ItemId, name: impl Into<String>, displayed: bool) -> Self {
        Self {
            item_id,
            name: name.into(),
            displayed,
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.displayed
    }

    /// Ask the server to set the flag to `favorite`; commit locally on success.
    pub async fn apply(&mut self, api: &dyn CatalogApi, favorite: bool) -> Toast {
        match api.set_favorite(&self.item_id, favorite).await {
            Ok(()) => {
                self.displayed = favorite;
                let verb = if favorite { "Marked" } else { "Unmarked" };
                Toast::new(
                    TOAST_TITLE,
                    format!("{} '{}' as Favorite", verb, self.name),
                    ToastStyle::Success,
                )
            }
            Err(e) => {
                tracing::warn!(item = %self.item_id, "Failed to update favorite: {}", e);
                Toast::new(
                    TOAST_TITLE,
                    format!("Cannot Mark Item: {}", e),
                    ToastStyle::Failure,
                )
            }
        }
    }

    /// Flip the displayed state.
    pub async fn toggle(&mut self, api: &dyn CatalogApi) -> Toast {
        let target = !self.displayed;
        self.apply(api, target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jellygrid_common::{Error, ItemKind, MediaItem, Result};
    use std::sync::Mutex;

    struct FakeApi {
        outcome: fn() -> Result<()>,
        calls: Mutex<Vec<(ItemId, bool)>>,
    }

    impl FakeApi {
        fn new(outcome: fn() -> Result<()>) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CatalogApi for FakeApi {
        async fn fetch_items(
            &self,
            _kinds: &[ItemKind],
            _parent_id: Option<&ItemId>,
        ) -> Result<Vec<MediaItem>> {
            Ok(Vec::new())
        }

        async fn set_favorite(&self, item_id: &ItemId, favorite: bool) -> Result<()> {
            self.calls.lock().unwrap().push((item_id.clone(), favorite));
            (self.outcome)()
        }
    }

    #[tokio::test]
    async fn success_commits_flag() {
        let api = FakeApi::new(|| Ok(()));
        let mut toggle = FavoriteToggle::new(ItemId::from("i1"), "Heat", false);

        let toast = toggle.apply(&api, true).await;

        assert!(toggle.is_favorite());
        assert_eq!(toast.style, ToastStyle::Success);
        assert_eq!(toast.message, "Marked 'Heat' as Favorite");
        assert_eq!(
            api.calls.lock().unwrap().as_slice(),
            &[(ItemId::from("i1"), true)]
        );
    }

    #[tokio::test]
    async fn unmark_message() {
        let api = FakeApi::new(|| Ok(()));
        let mut toggle = FavoriteToggle::new(ItemId::from("i1"), "Heat", true);

        let toast = toggle.toggle(&api).await;

        assert!(!toggle.is_favorite());
        assert_eq!(toast.message, "Unmarked 'Heat' as Favorite");
    }

    #[tokio::test]
    async fn status_failure_keeps_flag() {
        let api = FakeApi::new(|| Err(Error::from_status(500)));
        let mut toggle = FavoriteToggle::new(ItemId::from("i1"), "Heat", false);

        let toast = toggle.toggle(&api).await;

        assert!(!toggle.is_favorite());
        assert!(toast.is_failure());
        assert_eq!(toast.message, "Cannot Mark Item: Server returned 500");
    }

    #[tokio::test]
    async fn transport_failure_keeps_flag() {
        let api = FakeApi::new(|| Err(Error::transport("connection refused")));
        let mut toggle = FavoriteToggle::new(ItemId::from("i1"), "Heat", true);

        toggle.apply(&api, false).await;

        assert!(toggle.is_favorite());
    }

    #[tokio::test]
    async fn toggles_are_independent() {
        let ok = FakeApi::new(|| Ok(()));
        let failing = FakeApi::new(|| Err(Error::from_status(404)));
        let mut first = FavoriteToggle::new(ItemId::from("a"), "A", false);
        let mut second = FavoriteToggle::new(ItemId::from("b"), "B", false);

        let (a, b) = tokio::join!(first.toggle(&ok), second.toggle(&failing));

        assert!(!a.is_failure());
        assert!(b.is_failure());
        assert!(first.is_favorite());
        assert!(!second.is_favorite());
    }
}
