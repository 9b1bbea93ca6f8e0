//! Integration tests for the command handlers, written to report files.

mod common;

use common::{file, vignette, MemoryBackend};
use family_memories::{
    cli::{
        run_dashboard, run_feed, run_file_delete, run_file_download, run_file_edit,
        run_file_upload, run_file_view, run_vignette_create, run_vignette_delete,
        run_vignette_update, run_vignette_view,
    },
    pipeline::{exit_codes, OutputTarget},
    AppConfig, MemoriesError, OutputFormat, SortMode, VignetteDraft,
};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

fn json_config(admin: bool) -> AppConfig {
    AppConfig::builder()
        .output_format(OutputFormat::Json)
        .admin(admin)
        .quiet(true)
        .build()
}

fn text_config(admin: bool) -> AppConfig {
    AppConfig::builder()
        .admin(admin)
        .no_color(true)
        .quiet(true)
        .build()
}

fn report_target(dir: &TempDir) -> (OutputTarget, PathBuf) {
    let path = dir.path().join("report.out");
    (OutputTarget::File(path.clone()), path)
}

fn read_json(path: &PathBuf) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn seeded() -> MemoryBackend {
    MemoryBackend::new()
        .with_vignettes(vec![
            vignette(1, "Summer at the lake", Some("2023-07-04T10:00:00")),
            vignette(2, "Grandpa's workshop", Some("2021-03-15T09:30:00")),
        ])
        .with_files(vec![
            file(
                3,
                Some("Wedding photo"),
                "wedding.jpg",
                Some("image/jpeg"),
                Some("2022-06-01T12:00:00"),
            ),
            file(4, None, "recipes.pdf", Some("application/pdf"), None),
        ])
        .with_blob(4, b"%PDF-1.4")
}

mod feed_command {
    use super::*;

    #[test]
    fn test_json_feed_with_admin_actions() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);

        let code = run_feed(&seeded(), &json_config(true), Some(SortMode::DateAsc), &target).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let json = read_json(&path);
        assert_eq!(json["sort"], "date-asc");
        assert_eq!(json["total"], 4);
        let titles: Vec<&str> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["display_title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec!["recipes.pdf", "Grandpa's workshop", "Wedding photo", "Summer at the lake"]
        );
        assert_eq!(
            json["items"][0]["actions"],
            serde_json::json!(["view", "download", "edit", "delete"])
        );
    }

    #[test]
    fn test_guest_feed_has_no_manage_actions() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);

        run_feed(&seeded(), &json_config(false), None, &target).unwrap();

        let json = read_json(&path);
        assert_eq!(json["sort"], "date-desc");
        for item in json["items"].as_array().unwrap() {
            let actions = item["actions"].as_array().unwrap();
            assert!(!actions.contains(&Value::from("delete")), "{item}");
            assert!(!actions.contains(&Value::from("edit")), "{item}");
        }
    }

    #[test]
    fn test_one_failed_list_still_renders() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded();
        backend.fail("list_files");

        let code = run_feed(&backend, &json_config(false), None, &target).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        assert_eq!(read_json(&path)["total"], 2);
    }

    #[test]
    fn test_both_lists_failing_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded();
        backend.fail("list_files");
        backend.fail("list_vignettes");

        assert!(run_feed(&backend, &json_config(false), None, &target).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_text_feed() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);

        run_feed(&MemoryBackend::new(), &text_config(false), None, &target).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("No content yet"), "{text}");
    }
}

mod dashboard_command {
    use super::*;

    #[test]
    fn test_dashboard_json() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded().with_media(4, 1);

        run_dashboard(&backend, &json_config(false), &target).unwrap();

        let json = read_json(&path);
        assert_eq!(json["stats"]["vignettes"], 2);
        assert_eq!(json["stats"]["photos"], 4);
        assert_eq!(json["stats"]["audio"], 1);
        assert_eq!(json["stats"]["files"], 2);
        assert_eq!(json["recent_vignettes"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_dashboard_failure_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        let backend = seeded();
        backend.fail("list_photos");

        let err = run_dashboard(&backend, &json_config(false), &target).unwrap_err();
        assert!(err.to_string().contains("Failed to load dashboard"), "{err}");
    }
}

mod vignette_commands {
    use super::*;

    #[test]
    fn test_create_then_view() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded();
        let config = json_config(false);

        let draft = VignetteDraft::new("First snow", Some("We built a fort.".into()));
        run_vignette_create(&backend, &config, draft, &target).unwrap();
        let created = read_json(&path);
        assert_eq!(created["title"], "First snow");
        let id = created["id"].as_i64().unwrap();

        run_vignette_view(&backend, &config, id, &target).unwrap();
        assert_eq!(read_json(&path)["content"], "We built a fort.");
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        let backend = seeded();

        let draft = VignetteDraft::new("   ", None);
        assert!(run_vignette_create(&backend, &json_config(false), draft, &target).is_err());
        assert_eq!(backend.call_count("create_vignette"), 0);
    }

    #[test]
    fn test_update_keeps_unchanged_fields() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded();

        run_vignette_update(
            &backend,
            &json_config(true),
            1,
            Some("Summer at Lake Tahoe".into()),
            None,
            &target,
        )
        .unwrap();

        let json = read_json(&path);
        assert_eq!(json["title"], "Summer at Lake Tahoe");
        assert_eq!(json["content"], "Story about Summer at the lake");
    }

    #[test]
    fn test_update_requires_admin() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        let backend = seeded();

        let err = run_vignette_update(
            &backend,
            &json_config(false),
            1,
            Some("New".into()),
            None,
            &target,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MemoriesError>(),
            Some(MemoriesError::NotAuthorized(_))
        ));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_view_unknown_vignette() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        let err = run_vignette_view(&seeded(), &json_config(false), 99, &target).unwrap_err();
        assert_eq!(err.to_string(), "Vignette 99 not found");
    }

    #[test]
    fn test_guest_delete_refused_without_prompt() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        let backend = seeded();
        let mut asked = false;

        let result = run_vignette_delete(
            &backend,
            &json_config(false),
            1,
            &mut |_: &str| {
                asked = true;
                true
            },
            &target,
        );

        assert!(result.is_err());
        assert!(!asked);
        assert_eq!(backend.vignettes().len(), 2);
    }

    #[test]
    fn test_declined_delete_reports_kept() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded();

        let code = run_vignette_delete(&backend, &json_config(true), 1, &mut |_: &str| false, &target)
            .unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        let json = read_json(&path);
        assert_eq!(json["outcome"], "declined");
        assert_eq!(json["item_type"], "vignette");
        assert_eq!(backend.call_count("delete_vignette"), 0);
    }

    #[test]
    fn test_confirmed_delete_text() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded();

        run_vignette_delete(&backend, &text_config(true), 2, &mut |_: &str| true, &target).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Deleted vignette #2"), "{text}");
        assert_eq!(backend.vignettes().len(), 1);
    }
}

mod file_commands {
    use super::*;

    #[test]
    fn test_view_text_file_into_output_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("previews").join("recipe.txt");
        let target = OutputTarget::from_option(Some(path.clone()));
        let backend = MemoryBackend::new()
            .with_files(vec![file(7, Some("Pie"), "pie.txt", Some("text/plain"), None)])
            .with_blob(7, b"Two cups of flour");

        let code = run_file_view(&backend, &text_config(false), 7, false, &target).unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Two cups of flour\n");
    }

    #[test]
    fn test_upload_partial_failure_exit_code() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let good = tmp.path().join("good.txt");
        let bad = tmp.path().join("bad.txt");
        std::fs::write(&good, "ok").unwrap();
        std::fs::write(&bad, "too big").unwrap();
        let backend = MemoryBackend::new();
        backend.fail_upload_of("bad.txt");

        let code = run_file_upload(&backend, &json_config(false), &[good, bad], &target).unwrap();

        assert_eq!(code, exit_codes::PARTIAL_FAILURE);
        let json = read_json(&path);
        assert_eq!(json["uploaded"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["entries"][1]["status"], "failed");
    }

    #[test]
    fn test_upload_all_succeed() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        let photo = tmp.path().join("beach.jpg");
        std::fs::write(&photo, [0xFF, 0xD8]).unwrap();

        let code =
            run_file_upload(&MemoryBackend::new(), &json_config(false), &[photo], &target).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_upload_nothing_selected() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        assert!(run_file_upload(&MemoryBackend::new(), &json_config(false), &[], &target).is_err());
    }

    #[test]
    fn test_download_to_configured_dir() {
        let tmp = TempDir::new().unwrap();
        let downloads = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let config = AppConfig::builder()
            .output_format(OutputFormat::Json)
            .download_dir(Some(downloads.path().to_path_buf()))
            .build();

        run_file_download(&seeded(), &config, 4, None, &target).unwrap();

        let saved = downloads.path().join("recipes.pdf");
        assert_eq!(std::fs::read(&saved).unwrap(), b"%PDF-1.4");
        let json = read_json(&path);
        assert_eq!(json["saved_to"], saved.display().to_string());
    }

    #[test]
    fn test_download_failure_uses_backend_detail() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        let dest = tmp.path().join("wedding.jpg");

        let err = run_file_download(&seeded(), &json_config(false), 3, Some(&dest), &target)
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to download file: File not found");
        assert!(!dest.exists());
    }

    #[test]
    fn test_edit_file_title_keeps_description() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded();

        run_file_edit(
            &backend,
            &json_config(true),
            3,
            Some("Our wedding".into()),
            None,
            &target,
        )
        .unwrap();

        let json = read_json(&path);
        assert_eq!(json["title"], "Our wedding");
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_edit_file_requires_something_to_change() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        assert!(run_file_edit(&seeded(), &json_config(true), 3, None, None, &target).is_err());
    }

    #[test]
    fn test_file_delete_confirmed() {
        let tmp = TempDir::new().unwrap();
        let (target, path) = report_target(&tmp);
        let backend = seeded();

        run_file_delete(&backend, &json_config(true), 4, &mut |_: &str| true, &target).unwrap();

        assert_eq!(read_json(&path)["outcome"], "deleted");
        assert_eq!(backend.files().len(), 1);
    }

    #[test]
    fn test_file_delete_backend_failure() {
        let tmp = TempDir::new().unwrap();
        let (target, _) = report_target(&tmp);
        let backend = seeded();
        backend.fail("delete_file");

        let err = run_file_delete(&backend, &json_config(true), 4, &mut |_: &str| true, &target)
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete file. Please try again.");
        assert_eq!(backend.files().len(), 2);
    }
}
