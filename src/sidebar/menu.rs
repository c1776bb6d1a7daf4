use crate::api::types::{FeedMembership, SubscriptionCategory};

// ============================================================================
// Context menus as data
// ============================================================================

/// Actions a context menu can trigger.
///
/// `EditFeed`, `UnfollowFeed`, and `OpenFeedInBrowser` are wired but
/// deliberately perform nothing yet; see the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    RenameCategory,
    DeleteCategory,
    EditFeed,
    UnfollowFeed,
    OpenFeedInBrowser,
    OpenSiteInBrowser,
}

/// One entry of a context menu: a labeled action or a visual separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Action {
        label: &'static str,
        action: MenuAction,
    },
    Separator,
}

/// What the open menu operates on.
#[derive(Debug, Clone)]
pub enum MenuTarget {
    Category {
        name: String,
        feed_id_list: Vec<String>,
    },
    Feed {
        feed_id: String,
        title: String,
        site_url: String,
    },
}

/// An open context menu: a target, its entry descriptors, and a cursor that
/// always rests on an action entry (separators are skipped).
pub struct ContextMenu {
    pub target: MenuTarget,
    pub entries: Vec<MenuEntry>,
    pub selected: usize,
}

impl ContextMenu {
    /// Menu for a category header row.
    pub fn for_category(cat: &SubscriptionCategory) -> Self {
        Self {
            target: MenuTarget::Category {
                name: cat.name.clone(),
                feed_id_list: cat.feed_id_list(),
            },
            entries: vec![
                MenuEntry::Action {
                    label: "Rename Category",
                    action: MenuAction::RenameCategory,
                },
                MenuEntry::Action {
                    label: "Delete Category",
                    action: MenuAction::DeleteCategory,
                },
            ],
            selected: 0,
        }
    }

    /// Menu for a feed row.
    pub fn for_feed(feed: &FeedMembership) -> Self {
        Self {
            target: MenuTarget::Feed {
                feed_id: feed.feed_id.clone(),
                title: feed.feeds.title.clone(),
                site_url: feed.feeds.site_url.clone(),
            },
            entries: vec![
                MenuEntry::Action {
                    label: "Edit",
                    action: MenuAction::EditFeed,
                },
                MenuEntry::Action {
                    label: "Unfollow",
                    action: MenuAction::UnfollowFeed,
                },
                MenuEntry::Separator,
                MenuEntry::Action {
                    label: "Open Feed in Browser",
                    action: MenuAction::OpenFeedInBrowser,
                },
                MenuEntry::Action {
                    label: "Open Site in Browser",
                    action: MenuAction::OpenSiteInBrowser,
                },
            ],
            selected: 0,
        }
    }

    /// Overlay title: the category or feed name.
    pub fn title(&self) -> &str {
        match &self.target {
            MenuTarget::Category { name, .. } => name,
            MenuTarget::Feed { title, .. } => title,
        }
    }

    /// The action under the cursor.
    pub fn selected_action(&self) -> Option<MenuAction> {
        match self.entries.get(self.selected)? {
            MenuEntry::Action { action, .. } => Some(*action),
            MenuEntry::Separator => None,
        }
    }

    /// Move the cursor up to the previous action entry.
    pub fn select_prev(&mut self) {
        let mut idx = self.selected;
        while idx > 0 {
            idx -= 1;
            if matches!(self.entries[idx], MenuEntry::Action { .. }) {
                self.selected = idx;
                return;
            }
        }
    }

    /// Move the cursor down to the next action entry.
    pub fn select_next(&mut self) {
        let mut idx = self.selected;
        while idx + 1 < self.entries.len() {
            idx += 1;
            if matches!(self.entries[idx], MenuEntry::Action { .. }) {
                self.selected = idx;
                return;
            }
        }
    }
}
