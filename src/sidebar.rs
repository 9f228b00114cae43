//! Sidebar State Machine
//!
//! The category sidebar is either open or closed. Every gesture or action
//! that can move it is a `SidebarEvent`; closing events are idempotent.

use swipe_gestures::SwipeIntent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    SwipeOpen,
    SwipeClose,
    /// Menu toggle button
    Toggle,
    /// Close button inside the sidebar
    CloseButton,
    OverlayTap,
    BackNavigation,
    CategorySelected,
}

impl From<SwipeIntent> for SidebarEvent {
    fn from(intent: SwipeIntent) -> Self {
        match intent {
            SwipeIntent::Open => SidebarEvent::SwipeOpen,
            SwipeIntent::Close => SidebarEvent::SwipeClose,
        }
    }
}

impl SidebarState {
    pub fn is_open(self) -> bool {
        self == SidebarState::Open
    }

    pub fn next(self, event: SidebarEvent) -> SidebarState {
        match event {
            SidebarEvent::SwipeOpen => SidebarState::Open,
            SidebarEvent::Toggle => match self {
                SidebarState::Open => SidebarState::Closed,
                SidebarState::Closed => SidebarState::Open,
            },
            SidebarEvent::SwipeClose
            | SidebarEvent::CloseButton
            | SidebarEvent::OverlayTap
            | SidebarEvent::BackNavigation
            | SidebarEvent::CategorySelected => SidebarState::Closed,
        }
    }
}

/// Panel flags owned by the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar: SidebarState,
    pub search_active: bool,
}

impl UiState {
    pub fn sidebar_open(&self) -> bool {
        self.sidebar.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = UiState::default();
        assert_eq!(state.sidebar, SidebarState::Closed);
        assert!(!state.search_active);
    }

    #[test]
    fn test_toggle_flips() {
        let open = SidebarState::Closed.next(SidebarEvent::Toggle);
        assert_eq!(open, SidebarState::Open);
        assert_eq!(open.next(SidebarEvent::Toggle), SidebarState::Closed);
    }

    #[test]
    fn test_closing_events_are_idempotent() {
        let events = [
            SidebarEvent::SwipeClose,
            SidebarEvent::CloseButton,
            SidebarEvent::OverlayTap,
            SidebarEvent::BackNavigation,
            SidebarEvent::CategorySelected,
        ];
        for event in events {
            assert_eq!(SidebarState::Open.next(event), SidebarState::Closed);
            assert_eq!(SidebarState::Closed.next(event), SidebarState::Closed);
        }
    }

    #[test]
    fn test_swipe_open_keeps_open() {
        assert_eq!(SidebarState::Open.next(SidebarEvent::SwipeOpen), SidebarState::Open);
        assert_eq!(SidebarEvent::from(SwipeIntent::Open), SidebarEvent::SwipeOpen);
    }
}
