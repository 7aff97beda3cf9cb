//! Dashboard view-model
//!
//! Read-only projection of the catalog by publish status. Loads its
//! snapshot once on activation; mutations made elsewhere become visible
//! only on re-activation.

use crate::catalog::{CatalogStore, Tab, filter};
use crate::core::{Route, SessionStore};
use crate::views::EmptyState;
use shared::{AppResult, Product};

/// Dashboard tabs; there is no "all" tab here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Published,
    Unpublished,
}

impl From<DashboardTab> for Tab {
    fn from(tab: DashboardTab) -> Self {
        match tab {
            DashboardTab::Published => Tab::Published,
            DashboardTab::Unpublished => Tab::Unpublished,
        }
    }
}

#[derive(Debug)]
pub struct DashboardView {
    principal: String,
    products: Vec<Product>,
    tab: DashboardTab,
}

impl DashboardView {
    /// Activate the dashboard for the current principal
    ///
    /// Fails with a not-authenticated error (caller redirects to login)
    /// when no session is established. The catalog is loaded exactly once.
    pub fn activate(session: &SessionStore, store: &CatalogStore) -> AppResult<Self> {
        let principal = session.require_principal()?;
        let products = store.load()?;

        Ok(Self {
            principal,
            products,
            tab: DashboardTab::Published,
        })
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    /// Products visible under the active tab, original order preserved
    pub fn visible(&self) -> Vec<Product> {
        filter(&self.products, self.tab.into())
    }

    /// Empty-state copy when the active tab has nothing to show
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible().is_empty() {
            return None;
        }

        let label = match self.tab {
            DashboardTab::Published => "Published",
            DashboardTab::Unpublished => "Unpublished",
        };
        Some(EmptyState {
            headline: format!("No {label} Products"),
            body: format!("Your {label} Products will appear here"),
            hint: "Create your first product to publish".to_string(),
        })
    }

    /// Uppercased first character of the principal, for the avatar badge
    pub fn avatar_initial(&self) -> Option<char> {
        self.principal
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Clear the session and hand navigation the login route
    pub fn logout(self, session: &SessionStore) -> Route {
        session.clear();
        Route::Login
    }
}
