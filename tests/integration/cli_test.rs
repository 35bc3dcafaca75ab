//! Integration tests for the loadmark binary

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::Workspace;

/// New session with the run marked at 0s and 10s.
fn marked_run(ws: &Workspace) {
    for args in [
        ["new", "s.json", "--fps", "30"].as_slice(),
        &["mark", "s.json", "--item", "run", "--edge", "start", "--time", "0"],
        &["mark", "s.json", "--item", "run", "--edge", "end", "--time", "10"],
    ] {
        let (_stdout, stderr, exit_code) = ws.run(args);
        assert_eq!(exit_code, 0, "{:?} failed: {}", args, stderr);
    }
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let mut assert = Command::cargo_bin("loadmark")
        .unwrap()
        .arg("--help")
        .env("NO_COLOR", "1")
        .assert()
        .success();
    for sub in ["new", "show", "mark", "validate", "export", "import", "timecode"] {
        assert = assert.stdout(predicate::str::contains(sub));
    }
}

#[test]
fn version_flag_prints_package_version() {
    Command::cargo_bin("loadmark")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_session_file_reports_path() {
    let ws = Workspace::new();
    Command::cargo_bin("loadmark")
        .unwrap()
        .args(["show", "absent.json"])
        .current_dir(ws.dir.path())
        .env("LOADMARK_CONFIG", ws.config_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open session: absent.json"));
}

#[test]
fn mark_help_shows_edge_values() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["mark", "--help"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--edge"));
    assert!(stdout.contains("start"));
    assert!(stdout.contains("end"));
}

// ============================================================================
// Session Lifecycle Tests
// ============================================================================

#[test]
fn new_refuses_to_overwrite_without_force() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["new", "s.json"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Created"));
    assert!(ws.path("s.json").exists());

    let (_stdout, stderr, exit_code) = ws.run(&["new", "s.json"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) = ws.run(&["new", "s.json", "--force"]);
    assert_eq!(exit_code, 0);
}

#[test]
fn new_with_video_opens_first_load() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run(&[
        "new",
        "s.json",
        "--video",
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42",
    ]);
    assert_eq!(exit_code, 0, "{}", stderr);

    let json: serde_json::Value = serde_json::from_str(&ws.read("s.json")).unwrap();
    assert_eq!(json["videoId"], "dQw4w9WgXcQ");
    assert_eq!(json["loads"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["currentSelectedIndex"], 1);
}

#[test]
fn new_rejects_zero_fps() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run(&["new", "s.json", "--fps", "0"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Frame rate"));
    assert!(!ws.path("s.json").exists());
}

#[test]
fn marking_loads_auto_advances_and_shows_totals() {
    let ws = Workspace::new();
    marked_run(&ws);

    let (stdout, _stderr, exit_code) =
        ws.run(&["mark", "s.json", "--edge", "start", "--time", "1"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Marked Load #1 start at 01.000"));
    assert!(!stdout.contains("Started"));

    let (stdout, _stderr, exit_code) = ws.run(&["mark", "s.json", "--edge", "end", "--time", "3"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Started Load #2"));

    let (stdout, _stderr, exit_code) = ws.run(&["show", "s.json"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Load #1"));
    assert!(stdout.contains("> Load #2"));
    assert!(stdout.contains("00:00:08.000  (240 frames)"));
    assert!(stdout.contains("00:00:10.000  (300 frames)"));
    assert!(!stdout.contains("!"));
}

#[test]
fn remarking_a_complete_load_does_not_advance() {
    let ws = Workspace::new();
    marked_run(&ws);
    ws.run(&["mark", "s.json", "--edge", "start", "--time", "1"]);
    ws.run(&["mark", "s.json", "--edge", "end", "--time", "3"]);
    ws.run(&["select", "s.json", "1"]);

    let (stdout, _stderr, exit_code) = ws.run(&["mark", "s.json", "--edge", "end", "--time", "4"]);
    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("Started"));

    let json: serde_json::Value = serde_json::from_str(&ws.read("s.json")).unwrap();
    assert_eq!(json["loads"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["loads"][0]["endTime"], 4.0);
}

#[test]
fn auto_advance_can_be_disabled_in_config() {
    let ws = Workspace::new();
    ws.write("config.toml", "[timing]\nauto_advance = false\n");
    marked_run(&ws);
    ws.run(&["mark", "s.json", "--edge", "start", "--time", "1"]);

    let (stdout, _stderr, exit_code) = ws.run(&["mark", "s.json", "--edge", "end", "--time", "3"]);
    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("Started"));
}

#[test]
fn default_fps_comes_from_config() {
    let ws = Workspace::new();
    ws.write("config.toml", "[timing]\ndefault_fps = 60\n");
    let (_stdout, _stderr, exit_code) = ws.run(&["new", "s.json"]);
    assert_eq!(exit_code, 0);

    let json: serde_json::Value = serde_json::from_str(&ws.read("s.json")).unwrap();
    assert_eq!(json["fps"], 60);
}

#[test]
fn mark_rejects_negative_time() {
    let ws = Workspace::new();
    marked_run(&ws);
    let before = ws.read("s.json");

    let (_stdout, stderr, exit_code) =
        ws.run(&["mark", "s.json", "--edge", "start", "--time", "-2"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("non-negative"));
    assert_eq!(ws.read("s.json"), before);
}

#[test]
fn delete_and_select_unknown_ids_fail() {
    let ws = Workspace::new();
    marked_run(&ws);

    let (_stdout, stderr, exit_code) = ws.run(&["delete", "s.json", "7"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No timing item with id 7"));

    let (_stdout, _stderr, exit_code) = ws.run(&["select", "s.json", "7"]);
    assert_eq!(exit_code, 1);
}

#[test]
fn add_then_delete_load() {
    let ws = Workspace::new();
    marked_run(&ws);

    let (stdout, _stderr, exit_code) = ws.run(&["add", "s.json"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Added Load #1 (id 1)"));

    let (stdout, _stderr, exit_code) = ws.run(&["delete", "s.json", "1"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Deleted Load #1 (id 1)"));

    let json: serde_json::Value = serde_json::from_str(&ws.read("s.json")).unwrap();
    assert_eq!(json["loads"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["currentSelectedIndex"], 0);
}

#[test]
fn deleted_load_id_is_not_reused() {
    let ws = Workspace::new();
    marked_run(&ws);
    for _ in 0..3 {
        let (_stdout, stderr, exit_code) = ws.run(&["add", "s.json"]);
        assert_eq!(exit_code, 0, "{}", stderr);
    }
    let (_stdout, stderr, exit_code) = ws.run(&["delete", "s.json", "3"]);
    assert_eq!(exit_code, 0, "{}", stderr);

    let (stdout, _stderr, exit_code) = ws.run(&["add", "s.json"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("(id 4)"), "{}", stdout);
}

#[test]
fn mark_rejects_time_past_frame_range() {
    let ws = Workspace::new();
    marked_run(&ws);
    let before = ws.read("s.json");

    let (_stdout, stderr, exit_code) =
        ws.run(&["mark", "s.json", "--item", "run", "--edge", "end", "--time", "1e300"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("up to 10000000"), "{}", stderr);
    assert_eq!(ws.read("s.json"), before);
}

#[test]
fn offset_changes_seek_target_and_rta() {
    let ws = Workspace::new();
    marked_run(&ws);

    let (stdout, _stderr, exit_code) =
        ws.run(&["offset", "s.json", "--edge", "end", "--seconds", "-0.5"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Run end offset -0.500s (adjusted 09.500)"));

    let (stdout, _stderr, exit_code) = ws.run(&["seek", "s.json", "run", "--edge", "end"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "9.500");

    let (stdout, _stderr, _exit_code) = ws.run(&["show", "s.json"]);
    assert!(stdout.contains("(285 frames)"));
    assert!(stdout.contains("run end offset -0.500s"));
}

#[test]
fn fps_change_rescales_frames() {
    let ws = Workspace::new();
    marked_run(&ws);
    let (stdout, _stderr, exit_code) = ws.run(&["fps", "s.json", "60"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("60 fps"));

    let (stdout, _stderr, _exit_code) = ws.run(&["show", "s.json"]);
    assert!(stdout.contains("(600 frames)"));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn validate_reports_overlap_and_strict_fails() {
    let ws = Workspace::new();
    ws.write("config.toml", "[timing]\nauto_advance = false\n");
    marked_run(&ws);
    ws.run(&["add", "s.json"]);
    ws.run(&["mark", "s.json", "--item", "1", "--edge", "start", "--time", "2"]);
    ws.run(&["mark", "s.json", "--item", "1", "--edge", "end", "--time", "4"]);
    ws.run(&["add", "s.json"]);
    ws.run(&["mark", "s.json", "--item", "2", "--edge", "start", "--time", "3"]);
    ws.run(&["mark", "s.json", "--item", "2", "--edge", "end", "--time", "6"]);

    let (stdout, _stderr, exit_code) = ws.run(&["validate", "s.json"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("! [OVERLAP] Load #1 and Load #2 have overlapping timeframes"));

    let (_stdout, stderr, exit_code) = ws.run(&["validate", "s.json", "--strict"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("1 warning(s)"));

    let (stdout, _stderr, _exit_code) = ws.run(&["show", "s.json"]);
    assert!(stdout.contains("OVERLAP"));
}

#[test]
fn validate_clean_session() {
    let ws = Workspace::new();
    marked_run(&ws);
    let (stdout, _stderr, exit_code) = ws.run(&["validate", "s.json", "--strict"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No warnings"));
}

// ============================================================================
// Export / Import Tests
// ============================================================================

#[test]
fn export_requires_marked_run() {
    let ws = Workspace::new();
    ws.run(&["new", "s.json"]);
    let (stdout, stderr, exit_code) = ws.run(&["export", "s.json"]);
    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("must both be marked"));
}

#[test]
fn export_writes_timestamped_record() {
    let ws = Workspace::new();
    marked_run(&ws);

    let (stdout, _stderr, exit_code) = ws.run(&["export", "s.json", "-o", "out.json"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Exported to"));

    let json: serde_json::Value = serde_json::from_str(&ws.read("out.json")).unwrap();
    let exported_at = json["exportedAt"].as_str().unwrap();
    assert!(exported_at.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(exported_at).is_ok());
    assert_eq!(json["summary"]["rtaFrames"], 300);
    assert_eq!(json["summary"]["lrtFrames"], 300);
}

#[test]
fn import_applies_partial_record() {
    let ws = Workspace::new();
    marked_run(&ws);
    ws.write("partial.json", r#"{ "fps": 60, "videoId": "abcdefghijk" }"#);

    let (_stdout, stderr, exit_code) = ws.run(&["import", "s.json", "partial.json"]);
    assert_eq!(exit_code, 0, "{}", stderr);

    let (stdout, _stderr, _exit_code) = ws.run(&["show", "s.json", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["fps"], 60);
    assert_eq!(json["videoId"], "abcdefghijk");
    assert_eq!(json["runEnd"]["time"], 10.0);
}

#[test]
fn import_rejects_huge_load_times() {
    let ws = Workspace::new();
    marked_run(&ws);
    let before = ws.read("s.json");
    ws.write(
        "huge.json",
        r#"{ "loads": [
            { "id": 1, "startTime": 0, "endTime": 1e300 },
            { "id": 2, "startTime": 0, "endTime": 1e300 } ] }"#,
    );

    let (_stdout, _stderr, exit_code) = ws.run(&["import", "s.json", "huge.json"]);
    assert_eq!(exit_code, 1);
    assert_eq!(ws.read("s.json"), before);
}

#[test]
fn import_creates_missing_session() {
    let ws = Workspace::new();
    ws.write(
        "record.json",
        r#"{ "loads": [{ "id": 3, "startTime": 1.0, "endTime": 2.0 }] }"#,
    );
    let (_stdout, _stderr, exit_code) = ws.run(&["import", "fresh.json", "record.json"]);
    assert_eq!(exit_code, 0);

    let (stdout, _stderr, _exit_code) = ws.run(&["add", "fresh.json"]);
    assert!(stdout.contains("(id 4)"));
}

#[test]
fn import_rejects_malformed_json() {
    let ws = Workspace::new();
    marked_run(&ws);
    let before = ws.read("s.json");
    ws.write("bad.json", "{ \"loads\": [ ");

    let (_stdout, stderr, exit_code) = ws.run(&["import", "s.json", "bad.json"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to import"));
    assert_eq!(ws.read("s.json"), before);
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn timecode_prints_frames_and_strings() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["timecode", "65.5", "--fps", "30"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("frames    1965"));
    assert!(stdout.contains("timecode  00:01:05.500"));
    assert!(stdout.contains("smart     01:05.500"));
}

#[test]
fn timecode_rejects_out_of_range_seconds() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run(&["timecode", "1e300", "--fps", "30"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Seconds must be"));

    let (_stdout, _stderr, exit_code) = ws.run(&["timecode", "1", "--fps", "5000"]);
    assert_eq!(exit_code, 1);
}

#[test]
fn video_id_extraction() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["video-id", "https://youtu.be/dQw4w9WgXcQ"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "dQw4w9WgXcQ");

    let (_stdout, stderr, exit_code) = ws.run(&["video-id", "not a url"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No video id"));
}

// ============================================================================
// Config and Completions Tests
// ============================================================================

#[test]
fn config_path_honours_override() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["config", "path"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), ws.config_path().display().to_string());
}

#[test]
fn config_show_prints_defaults() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[timing]"));
    assert!(stdout.contains("default_fps = 30"));
    assert!(stdout.contains("auto_advance = true"));
}

#[test]
fn completions_generate_for_bash() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["completions", "bash"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("loadmark"));
}
