// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! Two states: `Closed` and `Open(index)`, where `index` points into the
//! visible subset of the gallery. The lightbox does not own the subset; every
//! operation receives its current length so the `0 <= index < len` invariant
//! is checked against the subset the controller maintains.

/// Suggested file name for a download of the image at a 1-based position.
#[must_use]
pub fn suggested_file_name(position: usize) -> String {
    format!("image-{position}.jpg")
}

/// Current lightbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        /// Focus index within the visible subset.
        index: usize,
    },
}

/// Navigation snapshot used to render the lightbox chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxInfo {
    /// Focus index within the visible subset (0-based).
    pub index: usize,
    /// Number of entries reachable with previous/next.
    pub total: usize,
    /// Whether the previous/next controls are shown.
    pub controls_visible: bool,
}

impl LightboxInfo {
    /// 1-based position shown to the user and used for download names.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index + 1
    }
}

/// Previous/next controls are shown only when there is somewhere to go.
#[must_use]
pub fn navigation_controls_visible(visible_len: usize) -> bool {
    visible_len > 1
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    /// The shell suppresses background scrolling while this holds.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Focus index while open.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// Opens on `index`. Rejected (returns `false`, state unchanged) when
    /// `index` is outside the visible subset, including when it is empty.
    pub fn open(&mut self, index: usize, visible_len: usize) -> bool {
        if index >= visible_len {
            log::debug!("rejected lightbox open at {index} (visible: {visible_len})");
            return false;
        }
        self.state = LightboxState::Open { index };
        true
    }

    /// Closes the lightbox. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = LightboxState::Closed;
        was_open
    }

    /// Advances focus, wrapping to the first entry after the last.
    ///
    /// No-op while closed.
    pub fn next(&mut self, visible_len: usize) -> Option<usize> {
        let index = self.index()?;
        if visible_len == 0 {
            self.close();
            return None;
        }
        let next = (index + 1) % visible_len;
        self.state = LightboxState::Open { index: next };
        Some(next)
    }

    /// Moves focus back, wrapping to the last entry before the first.
    ///
    /// No-op while closed.
    pub fn previous(&mut self, visible_len: usize) -> Option<usize> {
        let index = self.index()?;
        if visible_len == 0 {
            self.close();
            return None;
        }
        let previous = if index == 0 {
            visible_len - 1
        } else {
            (index - 1).min(visible_len - 1)
        };
        self.state = LightboxState::Open { index: previous };
        Some(previous)
    }

    /// Re-anchors focus after the visible subset changed.
    ///
    /// `relocated` is the new index of the previously focused entry if it is
    /// still visible. Otherwise focus is clamped into the new subset, and the
    /// lightbox closes when the subset is empty. Nothing happens while closed.
    pub fn reconcile(&mut self, relocated: Option<usize>, visible_len: usize) {
        let Some(index) = self.index() else {
            return;
        };
        if visible_len == 0 {
            self.state = LightboxState::Closed;
            return;
        }
        let index = relocated
            .filter(|&i| i < visible_len)
            .unwrap_or_else(|| index.min(visible_len - 1));
        self.state = LightboxState::Open { index };
    }

    /// Navigation snapshot, `None` while closed.
    #[must_use]
    pub fn info(&self, visible_len: usize) -> Option<LightboxInfo> {
        self.index().map(|index| LightboxInfo {
            index,
            total: visible_len,
            controls_visible: navigation_controls_visible(visible_len),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lightbox_is_closed() {
        let lightbox = Lightbox::new();
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert!(!lightbox.is_open());
        assert!(lightbox.info(3).is_none());
    }

    #[test]
    fn open_within_bounds_focuses_index() {
        let mut lightbox = Lightbox::new();
        assert!(lightbox.open(2, 3));
        assert_eq!(lightbox.index(), Some(2));
        assert!(lightbox.is_open());
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.open(3, 3));
        assert!(!lightbox.open(0, 0));
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn rejected_open_keeps_previous_focus() {
        let mut lightbox = Lightbox::new();
        lightbox.open(1, 3);
        assert!(!lightbox.open(5, 3));
        assert_eq!(lightbox.index(), Some(1));
    }

    #[test]
    fn next_wraps_to_first() {
        let mut lightbox = Lightbox::new();
        lightbox.open(2, 3);
        assert_eq!(lightbox.next(3), Some(0));
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 4);
        assert_eq!(lightbox.previous(4), Some(3));
    }

    #[test]
    fn next_len_times_returns_to_start() {
        let len = 5;
        for start in 0..len {
            let mut lightbox = Lightbox::new();
            lightbox.open(start, len);
            for _ in 0..len {
                lightbox.next(len);
            }
            assert_eq!(lightbox.index(), Some(start));
        }
    }

    #[test]
    fn single_entry_navigation_stays_put() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 1);
        assert_eq!(lightbox.next(1), Some(0));
        assert_eq!(lightbox.previous(1), Some(0));
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.next(3), None);
        assert_eq!(lightbox.previous(3), None);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn close_reports_transition() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.close());
        lightbox.open(0, 2);
        assert!(lightbox.close());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn controls_depend_only_on_subset_length() {
        assert!(!navigation_controls_visible(0));
        assert!(!navigation_controls_visible(1));
        assert!(navigation_controls_visible(2));

        let mut lightbox = Lightbox::new();
        lightbox.open(0, 2);
        let first = lightbox.info(2).expect("open");
        lightbox.next(2);
        let second = lightbox.info(2).expect("open");
        assert_eq!(first.controls_visible, second.controls_visible);
    }

    #[test]
    fn info_reports_one_based_position() {
        let mut lightbox = Lightbox::new();
        lightbox.open(2, 4);
        let info = lightbox.info(4).expect("open");
        assert_eq!(info.position(), 3);
        assert_eq!(info.total, 4);
    }

    #[test]
    fn reconcile_follows_relocated_entry() {
        let mut lightbox = Lightbox::new();
        lightbox.open(2, 3);
        lightbox.reconcile(Some(0), 1);
        assert_eq!(lightbox.index(), Some(0));
    }

    #[test]
    fn reconcile_clamps_when_entry_disappears() {
        let mut lightbox = Lightbox::new();
        lightbox.open(4, 5);
        lightbox.reconcile(None, 2);
        assert_eq!(lightbox.index(), Some(1));
    }

    #[test]
    fn reconcile_closes_on_empty_subset() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 2);
        lightbox.reconcile(None, 0);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn reconcile_while_closed_stays_closed() {
        let mut lightbox = Lightbox::new();
        lightbox.reconcile(Some(1), 3);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn suggested_name_contains_position() {
        assert_eq!(suggested_file_name(3), "image-3.jpg");
    }
}
