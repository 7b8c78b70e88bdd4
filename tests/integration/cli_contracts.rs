use clap::Parser;
use shadowgit::config::ShadowgitConfig;
use shadowgit::tooling::cli::{Cli, CliContext, Commands};
use std::path::PathBuf;
use tempfile::TempDir;

fn context() -> CliContext {
    CliContext::with_config(ShadowgitConfig::default())
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["shadowgit", "hash", "/home/alice/proj"],
        vec!["shadowgit", "validate", "/tmp/project"],
        vec!["shadowgit", "validate", "/tmp/project", "--home", "/home/alice"],
        vec!["shadowgit", "locate", "--workspace-folder", "/w"],
        vec![
            "shadowgit",
            "locate",
            "--storage",
            "/store",
            "--active",
            "/w/src/main.rs",
            "--open",
            "/w/a.rs",
            "--open",
            "/w/b.rs",
            "--format",
            "json",
        ],
        vec!["shadowgit", "locate", "--snapshot", "editor.json"],
        vec!["shadowgit", "--log-level", "debug", "hash", "/x"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_snapshot_with_editor_flags() {
    let parsed = Cli::try_parse_from([
        "shadowgit",
        "locate",
        "--snapshot",
        "editor.json",
        "--active",
        "/w/main.rs",
    ]);
    assert!(parsed.is_err());
}

#[tokio::test]
async fn hash_command_prints_directory_hash() {
    let output = context()
        .execute(&Commands::Hash {
            path: "/home/alice/proj".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(output, "2737673389");
}

#[tokio::test]
async fn hash_command_rejects_empty_path() {
    let err = context()
        .execute(&Commands::Hash {
            path: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Working directory path cannot be empty");
}

#[tokio::test]
async fn validate_command_reports_protected_kind() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().to_path_buf();
    std::fs::create_dir(home.join("Downloads")).unwrap();

    let err = context()
        .execute(&Commands::Validate {
            path: home.join("Downloads"),
            home: Some(home.clone()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot use checkpoints in Downloads directory");
}

#[tokio::test]
async fn locate_command_emits_json_with_strategy() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let workspace = home.join("code");
    std::fs::create_dir_all(workspace.join("src")).unwrap();
    let store = temp.path().join("store");

    let output = context()
        .execute(&Commands::Locate {
            storage: Some(store.clone()),
            home: Some(home),
            workspace_folders: Vec::new(),
            active: Some(workspace.join("src").join("main.rs")),
            open_documents: Vec::new(),
            snapshot: None,
            format: "json".to_string(),
        })
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["strategy"], "active_document");
    let git_dir = PathBuf::from(value["git_dir"].as_str().unwrap());
    assert!(git_dir.starts_with(store.join("checkpoints")));
    assert!(git_dir.ends_with(".git"));
    assert!(git_dir.parent().unwrap().is_dir());
}

#[tokio::test]
async fn locate_command_reads_snapshot_file() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let workspace = temp.path().join("work");
    std::fs::create_dir_all(&workspace).unwrap();
    let snapshot_path = temp.path().join("editor.json");
    let snapshot = serde_json::json!({ "workspace_folders": [workspace] });
    std::fs::write(&snapshot_path, snapshot.to_string()).unwrap();

    let output = context()
        .execute(&Commands::Locate {
            storage: Some(temp.path().join("store")),
            home: Some(home),
            workspace_folders: Vec::new(),
            active: None,
            open_documents: Vec::new(),
            snapshot: Some(snapshot_path),
            format: "text".to_string(),
        })
        .await
        .unwrap();

    assert!(output.contains("detected:   declared_root"));
    assert!(output.contains(&workspace.display().to_string()));
}
