use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use super::*;
use crate::config::PanelConfig;
use crate::net::types::ProvinceCatalog;
use crate::state::resolver::{Resolution, lookup};
use crate::state::visibility::{DRAWER_HIDDEN_CLASS, SHEET_SETTLED_CLASS};
use crate::util::viewport::FixedViewport;

// =============================================================
// Helpers
// =============================================================

fn record(description: &str) -> ProvinceRecord {
    ProvinceRecord {
        description: description.to_owned(),
        province_image: format!("https://example.com/{description}/hero.jpg"),
        images: vec![
            format!("https://example.com/{description}/1.jpg"),
            format!("https://example.com/{description}/2.jpg"),
        ],
        schools: vec![SchoolInfo {
            name: format!("{description} Secondary"),
            address: Some("1 Ridge Rd".to_owned()),
            phone: None,
            email: None,
        }],
        volunteers: vec![VolunteerInfo { name: "Mele".to_owned(), contact: Some("mele@example.org".to_owned()) }],
        stats: ProvinceStats { districts: 5, students: 820 },
    }
}

fn catalog() -> ProvinceCatalog {
    let mut catalog = ProvinceCatalog::new();
    catalog.insert("A".to_owned(), serde_json::to_value(record("alpha")).unwrap());
    catalog.insert("B".to_owned(), serde_json::to_value(record("bravo")).unwrap());
    catalog
}

fn ready_composer(province: &str, rec: ProvinceRecord) -> PanelComposer {
    let mut composer = PanelComposer::default();
    let ticket = composer.sync_province(province).unwrap();
    composer.complete(&ticket, Ok(rec));
    composer
}

// =============================================================
// Loading states
// =============================================================

#[test]
fn first_render_requests_fetch_and_shows_loading() {
    let mut composer = PanelComposer::default();
    let rendered = composer.render("A", true, &FixedViewport::WIDE);
    assert!(rendered.view_model.is_loading());
    assert_eq!(rendered.request.as_ref().map(ResolveTicket::key), Some("A"));
}

#[test]
fn repeated_render_with_same_inputs_does_not_refetch() {
    let mut composer = PanelComposer::default();
    assert!(composer.render("A", true, &FixedViewport::WIDE).request.is_some());
    for _ in 0..5 {
        assert!(composer.render("A", true, &FixedViewport::WIDE).request.is_none());
    }
    assert_eq!(composer.resolver().generation(), 1);
}

#[test]
fn toggling_open_or_viewport_does_not_refetch() {
    let mut composer = ready_composer("A", record("alpha"));
    assert!(composer.render("A", false, &FixedViewport::WIDE).request.is_none());
    assert!(composer.render("A", false, &FixedViewport::NARROW).request.is_none());
    assert!(composer.render("A", true, &FixedViewport::NARROW).request.is_none());
}

#[test]
fn view_model_is_loading_for_unsynced_province() {
    let composer = ready_composer("A", record("alpha"));
    assert!(composer.view_model("B", true, false).is_loading());
}

#[test]
fn failed_fetch_renders_loading_indefinitely() {
    let mut composer = PanelComposer::default();
    let ticket = composer.render("A", true, &FixedViewport::WIDE).request.unwrap();
    composer.complete(&ticket, Err(FetchError::Transport("offline".to_owned())));

    assert_eq!(composer.resolver().resolution(), &Resolution::Failed);
    for _ in 0..3 {
        let rendered = composer.render("A", true, &FixedViewport::WIDE);
        assert_eq!(rendered.view_model, ViewModel::Loading);
        assert!(rendered.request.is_none());
    }
}

#[test]
fn retry_after_failure_populates_view() {
    let mut composer = PanelComposer::default();
    let ticket = composer.render("A", true, &FixedViewport::WIDE).request.unwrap();
    composer.complete(&ticket, Err(FetchError::Status(502)));

    let retry = composer.retry().unwrap();
    assert_eq!(composer.complete(&retry, Ok(record("alpha"))), Completion::Applied);
    let rendered = composer.render("A", true, &FixedViewport::WIDE);
    assert!(!rendered.view_model.is_loading());
}

#[test]
fn province_change_never_shows_previous_record() {
    let mut composer = ready_composer("A", record("alpha"));
    let rendered = composer.render("B", true, &FixedViewport::WIDE);
    assert!(rendered.view_model.is_loading());
    assert_eq!(rendered.request.as_ref().map(ResolveTicket::key), Some("B"));
}

// =============================================================
// Populated view model
// =============================================================

#[test]
fn ready_view_carries_header_tabs_and_visibility() {
    let mut composer = ready_composer("A", record("alpha"));
    let rendered = composer.render("A", true, &FixedViewport::NARROW);
    let panel = rendered.view_model.panel().unwrap();

    assert_eq!(panel.header.province, "A");
    assert_eq!(panel.tabs.active, Tab::About);
    assert_eq!(panel.visibility, compute_classes(true, true));
    assert_eq!(panel.visibility.transform_class, SHEET_SETTLED_CLASS);
}

#[test]
fn closed_wide_panel_slides_left() {
    let composer = ready_composer("A", record("alpha"));
    let vm = composer.view_model("A", false, false);
    assert_eq!(vm.panel().unwrap().visibility.transform_class, DRAWER_HIDDEN_CLASS);
}

#[test]
fn about_tab_exposes_image_description_volunteers_stats() {
    let composer = ready_composer("A", record("alpha"));
    let vm = composer.view_model("A", true, false);
    let expected = record("alpha");
    assert_eq!(
        vm.panel().unwrap().content,
        TabContent::About(AboutContent {
            image: expected.province_image,
            description: expected.description,
            volunteers: expected.volunteers,
            stats: expected.stats,
        })
    );
}

#[test]
fn schools_tab_exposes_only_schools() {
    let mut composer = ready_composer("A", record("alpha"));
    composer.select_tab(Tab::Schools);
    let vm = composer.view_model("A", true, false);
    assert_eq!(
        vm.panel().unwrap().content,
        TabContent::Schools(SchoolsContent { schools: record("alpha").schools })
    );
}

#[test]
fn photos_tab_exposes_only_images() {
    let mut composer = ready_composer("A", record("alpha"));
    composer.select_tab(Tab::Photos);
    let vm = composer.view_model("A", true, false);
    assert_eq!(
        vm.panel().unwrap().content,
        TabContent::Photos(PhotosContent { images: record("alpha").images })
    );
}

#[test]
fn content_always_matches_active_tab() {
    let mut composer = ready_composer("A", record("alpha"));
    for tab in [Tab::Photos, Tab::About, Tab::Schools, Tab::Schools, Tab::About] {
        composer.select_tab(tab);
        let vm = composer.view_model("A", true, true);
        let panel = vm.panel().unwrap();
        assert_eq!(panel.tabs.active, tab);
        assert_eq!(panel.content.tab(), tab);
    }
}

#[test]
fn default_record_populates_about_for_unknown_province() {
    let cfg = PanelConfig::default();
    let composer = ready_composer("Atlantis", lookup(&catalog(), "Atlantis", &cfg));
    let vm = composer.view_model("Atlantis", true, false);
    match &vm.panel().unwrap().content {
        TabContent::About(about) => {
            assert_eq!(about.description, "Information not available");
            assert_eq!(about.image, "");
            assert!(about.volunteers.is_empty());
            assert_eq!(about.stats, ProvinceStats { districts: 0, students: 0 });
        }
        other => panic!("expected About content, got {other:?}"),
    }
}

// =============================================================
// Tab persistence
// =============================================================

#[test]
fn active_tab_survives_province_change() {
    let mut composer = ready_composer("A", record("alpha"));
    composer.select_tab(Tab::Photos);

    let ticket = composer.render("B", true, &FixedViewport::WIDE).request.unwrap();
    composer.complete(&ticket, Ok(record("bravo")));

    let vm = composer.view_model("B", true, false);
    assert_eq!(vm.panel().unwrap().tabs.active, Tab::Photos);
    assert_eq!(composer.active_tab(), Tab::Photos);
}

#[test]
fn selecting_tab_does_not_issue_fetch() {
    let mut composer = ready_composer("A", record("alpha"));
    let generation = composer.resolver().generation();
    composer.select_tab(Tab::Schools);
    assert!(composer.render("A", true, &FixedViewport::WIDE).request.is_none());
    assert_eq!(composer.resolver().generation(), generation);
}

#[test]
fn panel_state_reflects_inputs_and_tab() {
    let mut composer = PanelComposer::default();
    composer.select_tab(Tab::Schools);
    assert_eq!(
        composer.panel_state(true, true),
        PanelState { is_open: true, is_narrow_viewport: true, active_tab: Tab::Schools }
    );
}

// =============================================================
// Out-of-order completion on a single-threaded executor
// =============================================================

type CatalogReply = Result<ProvinceCatalog, FetchError>;

async fn drive(composer: Rc<RefCell<PanelComposer>>, ticket: ResolveTicket, reply: oneshot::Receiver<CatalogReply>) {
    let cfg = PanelConfig::default();
    let outcome = match reply.await {
        Ok(result) => result.map(|catalog| lookup(&catalog, ticket.key(), &cfg)),
        Err(_) => Err(FetchError::Transport("sender dropped".to_owned())),
    };
    composer.borrow_mut().complete(&ticket, outcome);
}

#[test]
fn slow_first_fetch_cannot_overwrite_newer_province() {
    let composer = Rc::new(RefCell::new(PanelComposer::default()));
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let (tx_a, rx_a) = oneshot::channel();
    let ticket_a = composer.borrow_mut().render("A", true, &FixedViewport::WIDE).request.unwrap();
    spawner.spawn_local(drive(composer.clone(), ticket_a, rx_a)).unwrap();

    let (tx_b, rx_b) = oneshot::channel();
    let ticket_b = composer.borrow_mut().render("B", true, &FixedViewport::WIDE).request.unwrap();
    spawner.spawn_local(drive(composer.clone(), ticket_b, rx_b)).unwrap();

    pool.run_until_stalled();
    assert!(composer.borrow().view_model("B", true, false).is_loading());

    tx_b.send(Ok(catalog())).unwrap();
    pool.run_until_stalled();
    tx_a.send(Ok(catalog())).unwrap();
    pool.run_until_stalled();

    let vm = composer.borrow().view_model("B", true, false);
    match &vm.panel().unwrap().content {
        TabContent::About(about) => assert_eq!(about.description, "bravo"),
        other => panic!("expected About content, got {other:?}"),
    }
}

#[test]
fn failed_fetch_then_manual_retry_on_executor() {
    let composer = Rc::new(RefCell::new(PanelComposer::default()));
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let (tx, rx) = oneshot::channel();
    let ticket = composer.borrow_mut().render("A", true, &FixedViewport::WIDE).request.unwrap();
    spawner.spawn_local(drive(composer.clone(), ticket, rx)).unwrap();
    tx.send(Err(FetchError::Status(500))).unwrap();
    pool.run_until_stalled();
    assert!(composer.borrow_mut().render("A", true, &FixedViewport::WIDE).view_model.is_loading());

    let (tx, rx) = oneshot::channel();
    let retry = composer.borrow_mut().retry().unwrap();
    spawner.spawn_local(drive(composer.clone(), retry, rx)).unwrap();
    tx.send(Ok(catalog())).unwrap();
    pool.run_until_stalled();

    assert!(!composer.borrow_mut().render("A", true, &FixedViewport::WIDE).view_model.is_loading());
}
