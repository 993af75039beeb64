//! Music video catalog and its two-view browser.
//!
//! The catalog itself is a static, order-preserving table. The browser owns
//! the view state: a grid of every entry, or a single-player view of one
//! selected entry plus a quick-switch list of all the others. Selection is a
//! non-owning index into the static set.

use serde::Serialize;

/// One music video. `embed_id` is the YouTube video id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub embed_id: &'static str,
    pub description: &'static str,
}

impl VideoEntry {
    /// Shareable watch URL.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.embed_id)
    }

    /// Player-style embed URL.
    pub fn embed_url(&self) -> String {
        format!(
            "https://www.youtube.com/embed/{}?si=1&fs=1&modestbranding=1&rel=0",
            self.embed_id
        )
    }
}

/// Every released video, in release-page order.
pub const VIDEO_LIBRARY: &[VideoEntry] = &[
    VideoEntry {
        id: "crimson-tide",
        title: "Crimson Tide",
        embed_id: "r-0mfF3UUoQ",
        description: "Latest single from DEV 404",
    },
    VideoEntry {
        id: "us-vs-them",
        title: "Us vs. Them",
        embed_id: "4w_WfXl_pbE",
        description: "New release",
    },
    VideoEntry {
        id: "cracks-pavemant",
        title: "Cracks in the Pavemant",
        embed_id: "tYfNWMa8MU0",
        description: "Latest track",
    },
    VideoEntry {
        id: "race-against-time",
        title: "Race Against Time",
        embed_id: "VqVkf0COL1w",
        description: "Popular track",
    },
    VideoEntry {
        id: "party-history",
        title: "Party Through History",
        embed_id: "c7kxOS2wh9Q",
        description: "Fan favorite",
    },
    VideoEntry {
        id: "timeecode",
        title: "28:06:42:12",
        embed_id: "nGgCw4msDG8",
        description: "Concept track",
    },
    VideoEntry {
        id: "dont-blink",
        title: "Don't Blink",
        embed_id: "9R3sYBrbsRY",
        description: "High energy track",
    },
    VideoEntry {
        id: "hello-world",
        title: "Hello, World!",
        embed_id: "00-_LcpNSWM",
        description: "Debut single",
    },
    VideoEntry {
        id: "heirloom-fire",
        title: "Heirloom Of Fire",
        embed_id: "szuMdzyHrWk",
        description: "Epic track",
    },
];

/// Which view the browser is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMode {
    Grid,
    SinglePlayer,
}

/// View state over a static catalog.
///
/// The mode is derived from the selection, so "an entry is selected iff the
/// browser is in single-player view" holds by construction.
#[derive(Debug)]
pub struct CatalogBrowser {
    entries: &'static [VideoEntry],
    selected: Option<usize>,
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self::with_entries(VIDEO_LIBRARY)
    }

    pub fn with_entries(entries: &'static [VideoEntry]) -> Self {
        Self {
            entries,
            selected: None,
        }
    }

    pub fn entries(&self) -> &'static [VideoEntry] {
        self.entries
    }

    pub fn mode(&self) -> CatalogMode {
        if self.selected.is_some() {
            CatalogMode::SinglePlayer
        } else {
            CatalogMode::Grid
        }
    }

    pub fn selected(&self) -> Option<&'static VideoEntry> {
        self.selected.map(|i| &self.entries[i])
    }

    /// Select by id from either view. Switching while already in
    /// single-player re-points the selection directly, no trip through the
    /// grid. Returns false (and changes nothing) for an unknown id.
    pub fn select(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Select by position in the catalog.
    pub fn select_at(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Back to the grid. Clearing an empty selection is a no-op.
    pub fn back(&mut self) {
        self.selected = None;
    }

    /// Every entry except the selected one, in catalog order. In grid view
    /// (nothing selected) this is the whole catalog.
    pub fn others(&self) -> Vec<&'static VideoEntry> {
        let selected_id = self.selected().map(|e| e.id);
        self.entries
            .iter()
            .filter(|e| Some(e.id) != selected_id)
            .collect()
    }
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_ids_are_unique() {
        for (i, a) in VIDEO_LIBRARY.iter().enumerate() {
            for b in &VIDEO_LIBRARY[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate id {}", a.id);
            }
        }
    }

    #[test]
    fn test_starts_in_grid() {
        let browser = CatalogBrowser::new();
        assert_eq!(browser.mode(), CatalogMode::Grid);
        assert!(browser.selected().is_none());
        assert_eq!(browser.others().len(), VIDEO_LIBRARY.len());
    }

    #[test]
    fn test_select_enters_single_player() {
        let mut browser = CatalogBrowser::new();
        assert!(browser.select("us-vs-them"));
        assert_eq!(browser.mode(), CatalogMode::SinglePlayer);
        assert_eq!(browser.selected().unwrap().id, "us-vs-them");
    }

    #[test]
    fn test_others_never_contains_selected() {
        let mut browser = CatalogBrowser::new();
        for entry in VIDEO_LIBRARY {
            browser.select(entry.id);
            let others = browser.others();
            assert_eq!(others.len(), VIDEO_LIBRARY.len() - 1);
            assert!(others.iter().all(|e| e.id != entry.id));
        }
    }

    #[test]
    fn test_direct_switch_between_selections() {
        let mut browser = CatalogBrowser::new();
        browser.select("crimson-tide");
        // No back() in between — re-point the selection directly.
        assert!(browser.select("hello-world"));
        assert_eq!(browser.mode(), CatalogMode::SinglePlayer);
        assert_eq!(browser.selected().unwrap().id, "hello-world");
    }

    #[test]
    fn test_back_returns_to_grid() {
        let mut browser = CatalogBrowser::new();
        browser.select("dont-blink");
        browser.back();
        assert_eq!(browser.mode(), CatalogMode::Grid);
        assert!(browser.selected().is_none());
        // Double-back is a no-op.
        browser.back();
        assert_eq!(browser.mode(), CatalogMode::Grid);
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let mut browser = CatalogBrowser::new();
        browser.select("party-history");
        assert!(!browser.select("no-such-video"));
        assert_eq!(browser.selected().unwrap().id, "party-history");
    }

    #[test]
    fn test_select_at_bounds() {
        let mut browser = CatalogBrowser::new();
        assert!(browser.select_at(0));
        assert_eq!(browser.selected().unwrap().id, VIDEO_LIBRARY[0].id);
        assert!(!browser.select_at(VIDEO_LIBRARY.len()));
        assert_eq!(browser.selected().unwrap().id, VIDEO_LIBRARY[0].id);
    }

    #[test]
    fn test_custom_entry_set() {
        static TWO: &[VideoEntry] = &[
            VideoEntry {
                id: "a",
                title: "A",
                embed_id: "aaa",
                description: "",
            },
            VideoEntry {
                id: "b",
                title: "B",
                embed_id: "bbb",
                description: "",
            },
        ];
        let mut browser = CatalogBrowser::with_entries(TWO);
        assert!(browser.select("b"));
        assert_eq!(browser.others().len(), 1);
        assert_eq!(browser.others()[0].id, "a");
    }

    #[test]
    fn test_urls_embed_video_id() {
        let entry = &VIDEO_LIBRARY[0];
        assert!(entry.watch_url().contains(entry.embed_id));
        assert!(entry.embed_url().contains(entry.embed_id));
    }
}
