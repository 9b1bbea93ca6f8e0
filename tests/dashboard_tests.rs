//! Integration tests for the dashboard view.

mod common;

use common::{file, vignette, MemoryBackend};
use family_memories::{
    config::DashboardConfig, DashboardState, DashboardView,
};

fn populated() -> MemoryBackend {
    let vignettes = (1..=7)
        .map(|i| vignette(i, &format!("Story {i}"), Some("2024-01-01")))
        .collect();
    MemoryBackend::new()
        .with_vignettes(vignettes)
        .with_files(vec![
            file(1, None, "a.pdf", Some("application/pdf"), None),
            file(2, None, "b.jpg", Some("image/jpeg"), None),
        ])
        .with_media(12, 3)
}

#[test]
fn test_refresh_applies_all_counts() {
    let backend = populated();
    let mut view = DashboardView::new(&DashboardConfig::default());
    assert!(view.is_loading());

    view.refresh(&backend).unwrap();

    let snapshot = view.snapshot().unwrap();
    assert_eq!(snapshot.stats.vignettes, 7);
    assert_eq!(snapshot.stats.photos, 12);
    assert_eq!(snapshot.stats.audio, 3);
    assert_eq!(snapshot.stats.files, 2);
}

#[test]
fn test_recent_vignettes_keep_backend_order() {
    let backend = populated();
    let mut view = DashboardView::new(&DashboardConfig::default());
    view.refresh(&backend).unwrap();

    let ids: Vec<i64> = view
        .snapshot()
        .unwrap()
        .recent_vignettes
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_photo_limit_is_sent() {
    let backend = populated();
    let config = DashboardConfig {
        recent_limit: 2,
        photo_limit: 10,
    };
    let mut view = DashboardView::new(&config);
    view.refresh(&backend).unwrap();

    assert_eq!(backend.photo_limit(), Some(10));
    let snapshot = view.snapshot().unwrap();
    assert_eq!(snapshot.stats.photos, 10);
    assert_eq!(snapshot.recent_vignettes.len(), 2);
}

#[test]
fn test_any_failure_leaves_state_loading() {
    for op in ["list_vignettes", "list_photos", "list_audio", "list_files"] {
        let backend = populated();
        backend.fail(op);
        let mut view = DashboardView::new(&DashboardConfig::default());

        let err = view.refresh(&backend).unwrap_err();
        assert_eq!(err.status(), Some(500), "{op}");
        assert_eq!(view.state(), &DashboardState::Loading, "{op}");
    }
}

#[test]
fn test_failure_after_success_keeps_previous_snapshot() {
    let backend = populated();
    let mut view = DashboardView::new(&DashboardConfig::default());
    view.refresh(&backend).unwrap();
    let before = view.snapshot().cloned();

    backend.fail("list_audio");
    assert!(view.refresh(&backend).is_err());
    assert_eq!(view.snapshot().cloned(), before);
}

#[test]
fn test_empty_backend_is_ready_with_zero_counts() {
    let backend = MemoryBackend::new();
    let mut view = DashboardView::new(&DashboardConfig::default());
    view.refresh(&backend).unwrap();

    let snapshot = view.snapshot().unwrap();
    assert_eq!(snapshot.stats.vignettes + snapshot.stats.files, 0);
    assert!(snapshot.recent_vignettes.is_empty());
}
