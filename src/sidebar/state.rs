use crate::api::types::{FeedMembership, SubscriptionCategory, SubscriptionResponse};
use std::collections::HashMap;

// ============================================================================
// Views
// ============================================================================

/// A named subscription scope, used as the partition key for fetched data
/// and cache invalidation.
#[derive(Debug, Clone, Copy)]
pub struct ViewInfo {
    pub name: &'static str,
}

/// The fixed view table. Indices are the wire-level view identifiers.
pub const VIEWS: [ViewInfo; 2] = [ViewInfo { name: "All" }, ViewInfo { name: "Starred" }];

/// Display name for a view index.
pub fn view_name(view: usize) -> &'static str {
    VIEWS.get(view).map(|v| v.name).unwrap_or("Unknown")
}

// ============================================================================
// Selection
// ============================================================================

/// Granularity of a selection: a single feed or a whole category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Feed,
    Folder,
}

/// The currently highlighted row, owned by the application (the ancestor of
/// the sidebar), never by the sidebar itself. The sidebar only emits these
/// through its optional selection callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSelection {
    pub level: Level,
    /// Feed id for `Level::Feed`; comma-joined feed ids for `Level::Folder`.
    pub id: String,
    pub name: String,
    pub view: usize,
}

/// Comma-join feed identifiers into a folder selection id.
pub fn join_feed_ids(ids: &[String]) -> String {
    ids.join(",")
}

/// Split a folder selection id back into feed identifiers.
///
/// Inverse of [`join_feed_ids`] for identifier lists whose elements contain
/// no commas, which holds for the service's feed ids.
pub fn split_folder_id(id: &str) -> Vec<String> {
    if id.is_empty() {
        Vec::new()
    } else {
        id.split(',').map(str::to_owned).collect()
    }
}

// ============================================================================
// Section state
// ============================================================================

/// Open/closed state of one category section.
///
/// An explicit two-state value with a named transition, so the
/// cascade-then-override rule below stays auditable instead of living in an
/// ad-hoc boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Open,
    Closed,
}

impl SectionState {
    pub fn from_flag(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// The `ToggleOpen` transition.
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

// ============================================================================
// Rows
// ============================================================================

/// One visible row of the flattened sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Header row of a named category.
    Category { cat: usize },
    /// A feed row; `cat` indexes into the response list, `feed` into the
    /// category's feed list.
    Feed { cat: usize, feed: usize },
}

// ============================================================================
// Feed list state
// ============================================================================

/// Callback invoked when the user selects a folder or feed row.
pub type SelectionCallback = Box<dyn FnMut(ActiveSelection) + Send>;

/// State of the sidebar feed list.
///
/// Owns the global expansion flag and the per-category section states; the
/// subscription data itself is replaced wholesale on every refetch, while
/// section state is keyed by category name and survives those refreshes.
///
/// Expansion rule: setting the global flag force-applies it to every *named*
/// category (the flag always wins on change); manual toggles only persist
/// between flag changes. An unnamed category has no header row, is always
/// open, and is not togglable by either mechanism.
pub struct FeedListState {
    view: Option<usize>,
    hide_title: bool,
    expansion: bool,
    sections: HashMap<String, SectionState>,
    data: SubscriptionResponse,
    cursor: usize,
    on_select: Option<SelectionCallback>,
}

impl FeedListState {
    pub fn new(view: Option<usize>, hide_title: bool) -> Self {
        Self {
            view,
            hide_title,
            expansion: false,
            sections: HashMap::new(),
            data: SubscriptionResponse::default(),
            cursor: 0,
            on_select: None,
        }
    }

    /// Install the selection callback (interactive mode). Without one the
    /// list is display-only: activation never emits selections.
    pub fn set_on_select(&mut self, cb: SelectionCallback) {
        self.on_select = Some(cb);
    }

    pub fn view(&self) -> Option<usize> {
        self.view
    }

    /// Switch to a different view. Section state is discarded: the new view
    /// delivers a fresh category list.
    pub fn set_view(&mut self, view: Option<usize>) {
        if self.view != view {
            self.view = view;
            self.sections.clear();
            self.data = SubscriptionResponse::default();
            self.cursor = 0;
        }
    }

    /// Whether the header (title + aggregate unread) is rendered.
    pub fn shows_title(&self) -> bool {
        !self.hide_title && self.view.is_some()
    }

    pub fn data(&self) -> &SubscriptionResponse {
        &self.data
    }

    /// Replace the subscription data after a (re)fetch.
    ///
    /// Section states for categories still present are preserved; newly seen
    /// named categories start mirroring the current expansion flag, and the
    /// unnamed bucket is always open.
    pub fn set_data(&mut self, data: SubscriptionResponse) {
        let mut sections = HashMap::with_capacity(data.list.len());
        for cat in &data.list {
            if cat.name.is_empty() {
                continue;
            }
            let state = self
                .sections
                .get(&cat.name)
                .copied()
                .unwrap_or_else(|| SectionState::from_flag(self.expansion));
            sections.insert(cat.name.clone(), state);
        }
        self.sections = sections;
        self.data = data;
        self.clamp_cursor();
    }

    pub fn expansion(&self) -> bool {
        self.expansion
    }

    /// Set the global expansion flag, re-synchronizing every named section
    /// to the new value. This deliberately overrides manual toggles.
    pub fn set_expansion(&mut self, flag: bool) {
        self.expansion = flag;
        for cat in &self.data.list {
            if !cat.name.is_empty() {
                self.sections
                    .insert(cat.name.clone(), SectionState::from_flag(flag));
            }
        }
        self.clamp_cursor();
    }

    pub fn toggle_expansion(&mut self) {
        self.set_expansion(!self.expansion);
    }

    /// Current state of a category section. The unnamed bucket is always
    /// open.
    pub fn section_state(&self, name: &str) -> SectionState {
        if name.is_empty() {
            return SectionState::Open;
        }
        self.sections
            .get(name)
            .copied()
            .unwrap_or_else(|| SectionState::from_flag(self.expansion))
    }

    /// Manually toggle a category section. No-op for the unnamed bucket.
    pub fn toggle_section(&mut self, cat_idx: usize) {
        let Some(cat) = self.data.list.get(cat_idx) else {
            return;
        };
        if cat.name.is_empty() {
            return;
        }
        let next = self.section_state(&cat.name).toggled();
        self.sections.insert(cat.name.clone(), next);
        self.clamp_cursor();
    }

    // ------------------------------------------------------------------
    // Row projection and cursor
    // ------------------------------------------------------------------

    /// Flatten the categorized list into visible rows: a header per named
    /// category, followed by its feed rows while the section is open. The
    /// unnamed bucket contributes feed rows only.
    pub fn visible_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (ci, cat) in self.data.list.iter().enumerate() {
            if !cat.name.is_empty() {
                rows.push(Row::Category { cat: ci });
            }
            if self.section_state(&cat.name).is_open() {
                for fi in 0..cat.list.len() {
                    rows.push(Row::Feed { cat: ci, feed: fi });
                }
            }
        }
        rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The row under the cursor, if any rows are visible.
    pub fn cursor_row(&self) -> Option<Row> {
        self.visible_rows().get(self.cursor).copied()
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let max = self.visible_rows().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(max);
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_rows().len();
        self.cursor = if len == 0 {
            0
        } else {
            self.cursor.min(len - 1)
        };
    }

    pub fn category(&self, cat_idx: usize) -> Option<&SubscriptionCategory> {
        self.data.list.get(cat_idx)
    }

    pub fn feed(&self, cat_idx: usize, feed_idx: usize) -> Option<&FeedMembership> {
        self.data.list.get(cat_idx)?.list.get(feed_idx)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Selection record for a category header. None without a view.
    pub fn folder_selection(&self, cat_idx: usize) -> Option<ActiveSelection> {
        let view = self.view?;
        let cat = self.data.list.get(cat_idx)?;
        Some(ActiveSelection {
            level: Level::Folder,
            id: join_feed_ids(&cat.feed_id_list()),
            name: cat.name.clone(),
            view,
        })
    }

    /// Selection record for a feed row. None without a view.
    pub fn feed_selection(&self, cat_idx: usize, feed_idx: usize) -> Option<ActiveSelection> {
        let view = self.view?;
        let feed = self.feed(cat_idx, feed_idx)?;
        Some(ActiveSelection {
            level: Level::Feed,
            id: feed.feed_id.clone(),
            name: feed.feeds.title.clone(),
            view,
        })
    }

    /// Activate the row under the cursor, emitting a selection through the
    /// callback. Returns the emitted selection, or None when nothing was
    /// emitted (no rows, no view, or display-only mode).
    pub fn activate_cursor(&mut self) -> Option<ActiveSelection> {
        let sel = match self.cursor_row()? {
            Row::Category { cat } => self.folder_selection(cat)?,
            Row::Feed { cat, feed } => self.feed_selection(cat, feed)?,
        };
        let cb = self.on_select.as_mut()?;
        cb(sel.clone());
        Some(sel)
    }

    /// Whether `active` highlights the given category header.
    pub fn is_active_folder(active: Option<&ActiveSelection>, cat: &SubscriptionCategory) -> bool {
        matches!(active, Some(a) if a.level == Level::Folder && a.name == cat.name)
    }

    /// Whether `active` highlights the given feed row.
    pub fn is_active_feed(active: Option<&ActiveSelection>, feed: &FeedMembership) -> bool {
        matches!(active, Some(a) if a.level == Level::Feed && a.id == feed.feed_id)
    }
}

// ============================================================================
// Tests
// ============================================================================
