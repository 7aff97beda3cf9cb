//! End-to-end flow tests: login gate, OTP verification, catalog CRUD
//! across both views, and durability of the persisted snapshot.

use productr_admin::catalog::{CatalogStore, JsonFileBackend, MemoryBackend, Tab};
use productr_admin::core::Config;
use productr_admin::views::dashboard::{DashboardTab, DashboardView};
use productr_admin::views::login::LoginView;
use productr_admin::views::manager::ManagerView;
use productr_admin::views::otp_verify::OtpVerifyView;
use productr_admin::{AdminApp, Route};
use productr_client::MockOtpApi;
use rust_decimal::Decimal;
use shared::{ProductDraft, ProductType};
use std::sync::Arc;

fn test_config() -> Config {
    let mut config = Config::with_data_dir("/tmp/unused");
    config.show_debug_otp = true;
    config
}

fn test_app(mock: Arc<MockOtpApi>) -> AdminApp {
    AdminApp::with_parts(test_config(), Arc::new(MemoryBackend::new()), mock)
}

fn fill_draft(draft: &mut ProductDraft) {
    draft.product_name = "Brownie".to_string();
    draft.product_type = Some(ProductType::Food);
    draft.quantity_stock = Some(10);
    draft.mrp = Some(Decimal::from(200));
    draft.selling_price = Some(Decimal::from(180));
    draft.brand_name = "CakeZone".to_string();
}

#[tokio::test]
async fn full_login_to_catalog_flow() {
    let mock = Arc::new(MockOtpApi::new());
    mock.send_ok(Some("123456"));
    let app = test_app(mock);

    // Protected views are gated before login
    assert_eq!(app.resolve("/products"), Route::Login);

    // Login establishes the principal and navigates to OTP entry
    let mut login = LoginView::new();
    login.set_identifier("owner@store.example");
    assert_eq!(login.submit(app.session()), Some(Route::OtpVerify));

    // Activation sends the code; the debug passthrough is surfaced
    let mut otp = OtpVerifyView::activate(app.session(), app.client(), app.config())
        .await
        .unwrap();
    assert!(otp.otp_sent());
    let code = otp.debug_code().unwrap().to_string();

    otp.entry_mut().paste(&code);
    assert_eq!(otp.verify().await, Some(Route::Dashboard));

    // Manager: create and publish one product
    let mut manager = ManagerView::activate(app.session(), app.store()).unwrap();
    manager.open_create();
    fill_draft(manager.draft_mut().unwrap());
    manager.submit(app.store());

    let id = manager.visible()[0].id;
    assert!(!manager.visible()[0].published);
    manager.toggle_publish(id, app.store());

    // Dashboard activated afterwards sees the published record
    let dashboard = DashboardView::activate(app.session(), app.store()).unwrap();
    assert_eq!(dashboard.tab(), DashboardTab::Published);
    let visible = dashboard.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].product_name, "Brownie");
    assert_eq!(visible[0].id, id);

    // Logout gates everything again
    assert_eq!(dashboard.logout(app.session()), Route::Login);
    assert_eq!(app.resolve("/home"), Route::Login);
}

#[tokio::test]
async fn cross_view_staleness_until_reactivation() {
    let app = test_app(Arc::new(MockOtpApi::new()));
    app.session().establish("owner@store.example").unwrap();

    // Dashboard loads its snapshot first
    let dashboard = DashboardView::activate(app.session(), app.store()).unwrap();

    // Manager mutates the catalog afterwards
    let mut manager = ManagerView::activate(app.session(), app.store()).unwrap();
    manager.open_create();
    fill_draft(manager.draft_mut().unwrap());
    manager.submit(app.store());
    let id = manager.visible()[0].id;
    manager.toggle_publish(id, app.store());

    // The already-active dashboard does not observe the change
    assert!(dashboard.visible().is_empty());

    // Re-activation reloads the persisted snapshot
    let fresh = DashboardView::activate(app.session(), app.store()).unwrap();
    assert_eq!(fresh.visible().len(), 1);
}

#[test]
fn catalog_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");

    let store = CatalogStore::new(Arc::new(JsonFileBackend::new(&path)));
    let mut draft = ProductDraft::default();
    fill_draft(&mut draft);
    let created = store.create(draft).unwrap();
    store.toggle_publish(created.id).unwrap();

    // A fresh store over the same file sees the same collection
    let reopened = CatalogStore::new(Arc::new(JsonFileBackend::new(&path)));
    let products = reopened.load().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, created.id);
    assert!(products[0].published);
}

#[test]
fn corrupted_snapshot_degrades_to_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, "{{{ definitely not json").unwrap();

    let store = CatalogStore::new(Arc::new(JsonFileBackend::new(&path)));
    assert!(store.load().unwrap().is_empty());

    // The catalog is usable again from the empty state
    let mut draft = ProductDraft::default();
    fill_draft(&mut draft);
    store.create(draft).unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn snapshot_stays_filterable_across_stores() {
    let backend = Arc::new(MemoryBackend::new());
    let store = CatalogStore::new(backend.clone());

    for i in 0..4 {
        let mut draft = ProductDraft::default();
        fill_draft(&mut draft);
        draft.product_name = format!("p{i}");
        let p = store.create(draft).unwrap();
        if i % 2 == 0 {
            store.toggle_publish(p.id).unwrap();
        }
    }

    // A second store over the same backend projects identically
    let other = CatalogStore::new(backend);
    let products = other.load().unwrap();
    let published = productr_admin::catalog::filter(&products, Tab::Published);
    let unpublished = productr_admin::catalog::filter(&products, Tab::Unpublished);
    assert_eq!(published.len(), 2);
    assert_eq!(unpublished.len(), 2);
    assert_eq!(published.len() + unpublished.len(), products.len());
}
