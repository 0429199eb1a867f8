//! Top-level navigation between the dashboard views.
use strum::{EnumIter, IntoEnumIterator};

/// The screen currently shown below the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum Page {
    #[default]
    Live,
    Events,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Live => "Live Events",
            Page::Events => "Event Browser",
        }
    }

    /// Page after this one, wrapping around.
    pub fn next(self) -> Self {
        let pages: Vec<_> = Page::iter().collect();
        let index = pages.iter().position(|p| *p == self).unwrap_or(0);
        pages[(index + 1) % pages.len()]
    }

    /// Page before this one, wrapping around.
    pub fn prev(self) -> Self {
        let pages: Vec<_> = Page::iter().collect();
        let index = pages.iter().position(|p| *p == self).unwrap_or(0);
        pages[(index + pages.len() - 1) % pages.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_is_the_landing_page() {
        assert_eq!(Page::default(), Page::Live);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Page::Live.next(), Page::Events);
        assert_eq!(Page::Events.next(), Page::Live);
        assert_eq!(Page::Live.prev(), Page::Events);
    }
}
