//! Command line behaviour of the release-bundler binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("release-bundler").unwrap();
    for var in [
        "BUILD_CONFIGURATION",
        "BUNDLE_STAGING_ROOT",
        "BUNDLE_TOOLCHAIN",
        "BUNDLE_TOOLCHAIN_PATHS",
        "DEPLOY_SERVICE",
        "DEPLOY_TARGET_DIR",
        "DEPLOY_SETTLE_SECS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("locate"))
        .stdout(predicate::str::contains("assemble"))
        .stdout(predicate::str::contains("hook"));
}

#[test]
fn test_locate_marks_web_project() {
    bin()
        .arg("locate")
        .arg("--root")
        .arg(common::fixture_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("* web "))
        .stdout(predicate::str::contains("Shop.Web.csproj"))
        .stdout(predicate::str::contains("Shop.Core.csproj"))
        .stdout(predicate::str::contains("Stale").not());
}

#[test]
fn test_locate_json_reports_selection() {
    let output = bin()
        .arg("locate")
        .arg("--json")
        .arg("--root")
        .arg(common::fixture_root())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["selected"]["is_web_project"], true);
    assert_eq!(report["candidates"].as_array().unwrap().len(), 2);
}

#[test]
fn test_locate_empty_tree_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    bin()
        .arg("locate")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no *.csproj project descriptor found"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn test_assemble_writes_archive() {
    let temp = TempDir::new().unwrap();
    common::write_build_output(&temp.path().join("publish"));
    let output = temp.path().join("out/bundle.zip");

    bin()
        .arg("assemble")
        .arg("--build-output")
        .arg(temp.path().join("publish"))
        .arg("--manifest")
        .arg(common::fixture_root().join("appspec.yml"))
        .arg("--scripts")
        .arg(common::fixture_root().join("scripts"))
        .arg("--output")
        .arg(&output)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"manifest\": \"appspec.yml\""));

    let names = common::entry_names(&output);
    assert!(names.contains(&"app/Shop.Web.dll".to_string()));
    assert!(names.contains(&"scripts/post-install.sh".to_string()));
    assert!(temp.path().join("out/bundle-staging/app").is_dir());
}

#[test]
fn test_assemble_without_build_output_fails() {
    let temp = TempDir::new().unwrap();

    bin()
        .arg("assemble")
        .arg("--build-output")
        .arg(temp.path().join("publish"))
        .arg("--output")
        .arg(temp.path().join("bundle.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("build output is missing or empty"));

    assert!(!temp.path().join("bundle.zip").exists());
}

#[test]
fn test_assemble_default_staging_inside_build_output_fails() {
    let temp = TempDir::new().unwrap();
    let publish = temp.path().join("publish");
    common::write_build_output(&publish);

    bin()
        .arg("assemble")
        .arg("--build-output")
        .arg(&publish)
        .arg("--output")
        .arg(publish.join("bundle.zip"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must not be inside the build output"));

    assert!(!publish.join("bundle-staging").exists());
}

#[test]
fn test_pre_install_requires_target_dir() {
    bin()
        .args(["hook", "pre-install", "--service", "shop"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--target-dir"));
}

#[test]
fn test_hook_rejects_unknown_name() {
    bin()
        .args(["hook", "after-install", "--service", "shop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
