//! Integration test for the TUI startup path driven through `Model::init`.
//!
//! The startup context lives in process-wide `OnceLock`s, so the whole flow
//! runs in a single test.

mod support;

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use camino::Utf8PathBuf;
use shipdesk::export::ExportFormat;
use shipdesk::persistence::{PreferenceKey, PreferenceStore, migrate_database};
use shipdesk::shipments::sample_shipments;
use shipdesk::store::{FilterCriteria, LifecyclePhase, PersistedFilters};
use shipdesk::telemetry::test_support::RecordingTelemetrySink;
use shipdesk::telemetry::{NoopTelemetrySink, TelemetryEvent};
use shipdesk::tui::messages::AppMsg;
use shipdesk::tui::{
    DownloadTarget, ShipmentApp, set_download_target, set_filter_storage,
    set_initial_shipments, set_initial_terminal_size, set_telemetry_sink,
};

use support::{create_temp_dir, database_path};

fn query(text: &str) -> FilterCriteria {
    FilterCriteria {
        query: text.to_owned(),
        date_range: None,
    }
}

#[expect(clippy::expect_used, reason = "test code; panics are acceptable")]
fn run_cmd(runtime: &tokio::runtime::Runtime, cmd: Option<Cmd>) -> Box<dyn Any + Send> {
    let cmd = cmd.expect("a command should be returned");
    runtime
        .block_on(cmd)
        .expect("the command should produce a message")
}

#[test]
fn startup_restores_downloads_and_persists_filters() {
    let temp_dir = create_temp_dir();
    let database_url = database_path(&temp_dir);
    migrate_database(&database_url, &NoopTelemetrySink).expect("migrations should run");
    let preferences = PreferenceStore::new(database_url).expect("store should build");
    preferences
        .save(
            PreferenceKey::ShipmentFilters,
            &PersistedFilters {
                committed: query("garc"),
                staged: query("lópez"),
            },
        )
        .expect("filters should save");

    let download_path = Utf8PathBuf::from_path_buf(temp_dir.path().join("selection.jsonl"))
        .expect("temporary path should be UTF-8");
    let telemetry = RecordingTelemetrySink::default();

    assert!(set_initial_shipments(sample_shipments()));
    assert!(set_initial_terminal_size(100, 20));
    assert!(set_filter_storage(preferences.clone()));
    assert!(set_download_target(DownloadTarget {
        path: download_path.clone(),
        format: ExportFormat::Jsonl,
    }));
    assert!(set_telemetry_sink(Arc::new(telemetry.clone())));

    let runtime = tokio::runtime::Runtime::new().expect("runtime should start");
    let (mut app, init_cmd) = ShipmentApp::init();
    assert_eq!(app.phase(), LifecyclePhase::Restoring);

    let restored = run_cmd(&runtime, init_cmd);
    assert!(app.update(restored).is_none());
    assert_eq!(app.phase(), LifecyclePhase::Ready);
    assert_eq!(app.visible_count(), 1);
    assert!(app.view().contains("Search: \"garc\""));

    app.update(Box::new(AppMsg::ToggleSelectAll));
    app.update(Box::new(AppMsg::DownloadRequested));

    let written = std::fs::read_to_string(&download_path).expect("download file should exist");
    assert_eq!(written.lines().count(), 1);
    assert!(written.contains("\"numeroOrden\":\"2024020\""));
    assert!(
        app.status()
            .is_some_and(|status| status.starts_with("Downloaded 1 shipment(s) to")),
        "got status {:?}",
        app.status()
    );

    let save_cmd = app.update(Box::new(AppMsg::CommitFilters));
    let saved = run_cmd(&runtime, save_cmd);
    assert_eq!(saved.downcast_ref::<AppMsg>(), Some(&AppMsg::FiltersSaved));
    app.update(saved);
    assert!(app.error().is_none());

    let stored: Option<PersistedFilters> = preferences
        .load(PreferenceKey::ShipmentFilters)
        .expect("filters should load");
    assert_eq!(
        stored,
        Some(PersistedFilters {
            committed: query("lópez"),
            staged: query("lópez"),
        })
    );

    assert_eq!(
        telemetry.events(),
        vec![
            TelemetryEvent::SelectionDownloaded {
                shipment_count: 1,
                format: "jsonl".to_owned(),
            },
            TelemetryEvent::FiltersCommitted {
                visible_count: 1,
                total_count: 3,
                filtered: true,
            },
        ]
    );
}
