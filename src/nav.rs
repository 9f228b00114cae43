//! Bottom Navigation
//!
//! Each navigation entry is tagged with a `NavTab` when rendered; exactly one
//! tab is active at a time.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownNavTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTab {
    Home,
    Menu,
    Cart,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 4] = [NavTab::Home, NavTab::Menu, NavTab::Cart, NavTab::Profile];

    /// Value of the `data-nav` attribute
    pub fn key(self) -> &'static str {
        match self {
            NavTab::Home => "home",
            NavTab::Menu => "menu",
            NavTab::Cart => "cart",
            NavTab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Accueil",
            NavTab::Menu => "Menu",
            NavTab::Cart => "Panier",
            NavTab::Profile => "Profil",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavTab::Home => "🏠",
            NavTab::Menu => "📋",
            NavTab::Cart => "🛒",
            NavTab::Profile => "👤",
        }
    }

    pub fn action(self) -> NavAction {
        match self {
            NavTab::Home => NavAction::ShowHome,
            NavTab::Menu => NavAction::ShowMenu,
            NavTab::Cart => NavAction::ShowCart,
            NavTab::Profile => NavAction::ShowProfile,
        }
    }
}

impl FromStr for NavTab {
    type Err = UnknownNavTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavTab::ALL
            .into_iter()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| UnknownNavTab(s.to_string()))
    }
}

impl fmt::Display for NavTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// View switch requested by a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ShowHome,
    ShowMenu,
    ShowCart,
    ShowProfile,
}

/// Tracks the single active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavDispatcher {
    active: NavTab,
}

impl Default for NavDispatcher {
    fn default() -> Self {
        Self::new(NavTab::Menu)
    }
}

impl NavDispatcher {
    pub fn new(active: NavTab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> NavTab {
        self.active
    }

    /// Make `tab` the active entry and return its action
    pub fn select(&mut self, tab: NavTab) -> NavAction {
        self.active = tab;
        tab.action()
    }
}
