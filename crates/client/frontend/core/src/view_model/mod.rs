//! Presentation state owned by the UI event loop.
//!
//! Nothing here performs I/O. Background results arrive as
//! [`DashboardUpdate`](crate::event::DashboardUpdate)s and are folded in by
//! [`ViewModelUpdater`](crate::services::ViewModelUpdater).
mod backend;
mod browser;
mod live;

pub use backend::BackendStatus;
pub use browser::{EventBrowser, FilterForm, FormEdit, FormError, FormField, ResultPill};
pub use live::{EventCard, LiveFeed};

use crate::page::Page;

/// Complete dashboard state.
#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    /// The active page; the only state the header owns.
    pub page: Page,
    pub live: LiveFeed,
    pub browser: EventBrowser,
    pub backend: BackendStatus,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch pages. Returns `false` if `page` is already active.
    ///
    /// Leaving the event browser discards its form and result, and any query
    /// still in flight will be ignored when it answers.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }

        if self.page == Page::Events {
            self.browser = self.browser.remount();
        }

        tracing::debug!("Navigating {:?} -> {:?}", self.page, page);
        self.page = page;
        true
    }
}
