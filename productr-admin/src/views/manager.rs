//! Manager view-model
//!
//! The full CRUD surface: tabbed product list, modal create/edit form,
//! single-click publish toggle and delete, and a transient success
//! notification. Holds a working copy loaded once on activation; after a
//! mutation succeeds the copy is refreshed from the operation's returned
//! record, never by re-reading storage mid-session.

use crate::catalog::{CatalogStore, Tab, filter};
use crate::core::{Route, SessionStore};
use crate::views::EmptyState;
use chrono::{DateTime, Duration, Utc};
use shared::{AppResult, Product, ProductDraft};

/// How long a success notification stays up without an explicit close
pub const NOTIFICATION_TTL_MS: i64 = 3000;

/// Transient success notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    opened_at: DateTime<Utc>,
}

impl Notification {
    fn new(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            opened_at: now,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn expired(&self, now: DateTime<Utc>) -> bool {
        now - self.opened_at >= Duration::milliseconds(NOTIFICATION_TTL_MS)
    }
}

/// Open modal form state; dropping it is the draft reset
#[derive(Debug, Clone, Default)]
struct ModalState {
    draft: ProductDraft,
    editing: Option<i64>,
}

#[derive(Debug)]
pub struct ManagerView {
    principal: String,
    products: Vec<Product>,
    tab: Tab,
    modal: Option<ModalState>,
    notification: Option<Notification>,
    error: Option<String>,
}

impl ManagerView {
    /// Activate the manager for the current principal
    ///
    /// Fails with a not-authenticated error (caller redirects to login)
    /// when no session is established. The catalog is loaded exactly once
    /// into the working copy.
    pub fn activate(session: &SessionStore, store: &CatalogStore) -> AppResult<Self> {
        let principal = session.require_principal()?;
        let products = store.load()?;

        Ok(Self {
            principal,
            products,
            tab: Tab::All,
            modal: None,
            notification: None,
            error: None,
        })
    }

    // =========================================================================
    // List and tabs
    // =========================================================================

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Products visible under the active tab, original order preserved
    pub fn visible(&self) -> Vec<Product> {
        filter(&self.products, self.tab)
    }

    /// Empty-state copy: a brand-new catalog reads differently from a
    /// populated catalog whose active tab happens to be empty
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible().is_empty() {
            return None;
        }

        if self.products.is_empty() {
            return Some(EmptyState {
                headline: "Feels a little empty over here...".to_string(),
                body: "You can create products without connecting store".to_string(),
                hint: "you can add products to store anytime".to_string(),
            });
        }

        let label = match self.tab {
            Tab::All => "Matching",
            Tab::Published => "Published",
            Tab::Unpublished => "Unpublished",
        };
        Some(EmptyState {
            headline: format!("No {label} Products"),
            body: format!("Your {label} Products will appear here"),
            hint: "Create your first product to publish".to_string(),
        })
    }

    // =========================================================================
    // Modal form
    // =========================================================================

    /// Open the modal with a blank create form
    pub fn open_create(&mut self) {
        self.modal = Some(ModalState::default());
    }

    /// Open the modal pre-filled from an existing record
    ///
    /// A stale id (record no longer in the working copy) surfaces an error
    /// instead of opening the modal.
    pub fn open_edit(&mut self, id: i64) {
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => {
                self.modal = Some(ModalState {
                    draft: ProductDraft::from(product),
                    editing: Some(id),
                });
            }
            None => {
                self.error = Some(shared::AppError::product_not_found(id).message);
            }
        }
    }

    /// Close the modal by any path; the draft resets with it
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Whether the open modal is editing an existing record
    pub fn editing_id(&self) -> Option<i64> {
        self.modal.as_ref().and_then(|m| m.editing)
    }

    /// Form draft of the open modal, for input binding
    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        self.modal.as_mut().map(|m| &mut m.draft)
    }

    /// Submit the modal form
    ///
    /// Dispatches `update` when editing, `create` otherwise. On success
    /// the working copy absorbs the returned record, the modal closes, and
    /// a success notification opens. On failure the modal stays open with
    /// a visible message and nothing is persisted.
    pub fn submit(&mut self, store: &CatalogStore) {
        let Some(modal) = self.modal.clone() else {
            return;
        };

        let outcome = match modal.editing {
            Some(id) => store.update(id, modal.draft).map(|product| {
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == id) {
                    *slot = product;
                }
                "Product updated Successfully"
            }),
            None => store.create(modal.draft).map(|product| {
                self.products.push(product);
                "Product added Successfully"
            }),
        };

        match outcome {
            Ok(message) => {
                self.modal = None;
                self.error = None;
                self.notification = Some(Notification::new(message, Utc::now()));
            }
            Err(e) => {
                self.error = Some(e.message);
            }
        }
    }

    // =========================================================================
    // Single-click actions
    // =========================================================================

    /// Flip a record's publish state; no confirmation step
    pub fn toggle_publish(&mut self, id: i64, store: &CatalogStore) {
        match store.toggle_publish(id) {
            Ok(product) => {
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == id) {
                    *slot = product;
                }
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.message);
            }
        }
    }

    /// Delete a record; no confirmation step, idempotent
    pub fn delete(&mut self, id: i64, store: &CatalogStore) {
        match store.delete(id) {
            Ok(()) => {
                self.products.retain(|p| p.id != id);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.message);
            }
        }
    }

    // =========================================================================
    // Notification
    // =========================================================================

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Advance the clock; an expired notification dismisses itself
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.notification.as_ref().is_some_and(|n| n.expired(now)) {
            self.notification = None;
        }
    }

    /// Explicit close of the notification
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // =========================================================================
    // Misc
    // =========================================================================

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Uppercased first character of the principal, for the avatar badge
    pub fn avatar_initial(&self) -> Option<char> {
        self.principal
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
    }

    /// Clear the session and hand navigation the login route
    pub fn logout(self, session: &SessionStore) -> Route {
        session.clear();
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryBackend;
    use rust_decimal::Decimal;
    use shared::{ErrorCode, ProductType};
    use std::sync::Arc;

    fn store() -> CatalogStore {
        CatalogStore::new(Arc::new(MemoryBackend::new()))
    }

    fn session() -> SessionStore {
        let session = SessionStore::new();
        session.establish("user@example.com").unwrap();
        session
    }

    fn fill_draft(draft: &mut ProductDraft, name: &str) {
        draft.product_name = name.to_string();
        draft.product_type = Some(ProductType::Food);
        draft.quantity_stock = Some(10);
        draft.mrp = Some(Decimal::from(200));
        draft.selling_price = Some(Decimal::from(180));
        draft.brand_name = "CakeZone".to_string();
    }

    fn view_with_product(name: &str) -> (ManagerView, CatalogStore, i64) {
        let store = store();
        let mut view = ManagerView::activate(&session(), &store).unwrap();
        view.open_create();
        fill_draft(view.draft_mut().unwrap(), name);
        view.submit(&store);
        let id = view.visible()[0].id;
        (view, store, id)
    }

    #[test]
    fn test_activation_requires_principal() {
        let err = ManagerView::activate(&SessionStore::new(), &store()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn test_create_through_modal() {
        let (view, store, _) = view_with_product("Brownie");

        assert!(!view.is_modal_open(), "modal closes on successful submit");
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].product_name, "Brownie");
        assert_eq!(
            view.notification().unwrap().message(),
            "Product added Successfully"
        );

        // The working copy matches what was persisted
        assert_eq!(store.load().unwrap(), view.visible());
    }

    #[test]
    fn test_invalid_submit_keeps_modal_and_persists_nothing() {
        let store = store();
        let mut view = ManagerView::activate(&session(), &store).unwrap();

        view.open_create();
        view.submit(&store);

        assert!(view.is_modal_open());
        assert!(view.error().unwrap().contains("productName"));
        assert!(view.notification().is_none());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_edit_prefills_and_updates_in_place() {
        let (mut view, store, id) = view_with_product("Brownie");

        view.open_edit(id);
        assert_eq!(view.editing_id(), Some(id));
        let draft = view.draft_mut().unwrap();
        assert_eq!(draft.product_name, "Brownie");

        draft.product_name = "Walnut Brownie".to_string();
        view.submit(&store);

        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].id, id);
        assert_eq!(view.visible()[0].product_name, "Walnut Brownie");
        assert_eq!(
            view.notification().unwrap().message(),
            "Product updated Successfully"
        );
        assert_eq!(store.load().unwrap(), view.visible());
    }

    #[test]
    fn test_open_edit_with_stale_id_surfaces_error() {
        let (mut view, _store, id) = view_with_product("Brownie");
        view.open_edit(id + 1);
        assert!(!view.is_modal_open());
        assert!(view.error().is_some());
    }

    #[test]
    fn test_close_modal_resets_draft() {
        let (mut view, _store, _) = view_with_product("Brownie");

        view.open_create();
        view.draft_mut().unwrap().product_name = "half-typed".to_string();
        view.close_modal();

        view.open_create();
        assert_eq!(view.draft_mut().unwrap().product_name, "");
        assert_eq!(view.editing_id(), None);
    }

    #[test]
    fn test_toggle_publish_refreshes_working_copy() {
        let (mut view, store, id) = view_with_product("Brownie");

        view.toggle_publish(id, &store);
        assert!(view.visible()[0].published);

        view.set_tab(Tab::Published);
        assert_eq!(view.visible().len(), 1);

        view.toggle_publish(id, &store);
        assert!(view.visible().is_empty());
    }

    #[test]
    fn test_delete_refreshes_working_copy() {
        let (mut view, store, id) = view_with_product("Brownie");

        view.delete(id, &store);
        assert!(view.visible().is_empty());
        assert!(store.load().unwrap().is_empty());

        // Second delete of the same id is not an error
        view.delete(id, &store);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_stale_toggle_surfaces_not_found() {
        let (mut view, store, id) = view_with_product("Brownie");

        // Another surface removed the record behind this view's back
        store.delete(id).unwrap();

        view.toggle_publish(id, &store);
        assert!(view.error().is_some());
        // The working copy still shows the stale record until re-activation
        assert_eq!(view.visible().len(), 1);
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let (mut view, _store, _) = view_with_product("Brownie");
        assert!(view.notification().is_some());

        let now = Utc::now();
        view.tick(now + Duration::milliseconds(1000));
        assert!(view.notification().is_some());

        view.tick(now + Duration::milliseconds(NOTIFICATION_TTL_MS));
        assert!(view.notification().is_none());
    }

    #[test]
    fn test_notification_explicit_close() {
        let (mut view, _store, _) = view_with_product("Brownie");
        view.dismiss_notification();
        assert!(view.notification().is_none());
    }

    #[test]
    fn test_empty_states() {
        let store = store();
        let mut view = ManagerView::activate(&session(), &store).unwrap();

        let fresh = view.empty_state().unwrap();
        assert_eq!(fresh.headline, "Feels a little empty over here...");

        view.open_create();
        fill_draft(view.draft_mut().unwrap(), "Brownie");
        view.submit(&store);

        assert_eq!(view.empty_state(), None);

        view.set_tab(Tab::Published);
        let no_published = view.empty_state().unwrap();
        assert_eq!(no_published.headline, "No Published Products");
    }

    #[test]
    fn test_logout_clears_session() {
        let session = session();
        let store = store();
        let view = ManagerView::activate(&session, &store).unwrap();

        assert_eq!(view.logout(&session), Route::Login);
        assert_eq!(session.current(), None);
    }
}
