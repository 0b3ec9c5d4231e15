//! Integration tests for bundle assembly

mod common;

use release_bundler::bundler::{
    AssembleRequest, Error, assemble, builder::checksum::calculate_sha256,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn request(root: &Path, with_manifest: bool, with_scripts: bool) -> AssembleRequest {
    let fixture = common::fixture_root();
    AssembleRequest {
        build_output: root.join("publish"),
        manifest: with_manifest.then(|| fixture.join("appspec.yml")),
        scripts_dir: with_scripts.then(|| root.join("scripts")),
        staging_dir: root.join("staging"),
        destination: root.join("out/bundle.zip"),
    }
}

fn write_scripts(root: &Path) {
    let scripts = root.join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::write(
        scripts.join("pre-install.sh"),
        "#!/bin/bash\r\nset -e\r\nrelease-bundler hook pre-install\r\n",
    )
    .unwrap();
    fs::write(
        scripts.join("post-install.sh"),
        "#!/bin/bash\nset -e\nrelease-bundler hook post-install\n",
    )
    .unwrap();
    fs::write(scripts.join("notes.txt"), "kept as is\r\n").unwrap();
}

#[tokio::test]
async fn test_app_subtree_round_trips() {
    let temp = TempDir::new().unwrap();
    common::write_build_output(&temp.path().join("publish"));
    write_scripts(temp.path());

    let req = request(temp.path(), true, true);
    let bundle = assemble(&req).await.unwrap();

    let extracted = temp.path().join("extracted");
    common::extract(&bundle.archive, &extracted);

    assert_eq!(
        calculate_sha256(&extracted.join("app")).await.unwrap(),
        calculate_sha256(&req.build_output).await.unwrap()
    );
    assert_eq!(
        fs::read(extracted.join("appspec.yml")).unwrap(),
        fs::read(common::fixture_root().join("appspec.yml")).unwrap()
    );
    assert!(extracted.join("scripts/pre-install.sh").is_file());
}

#[tokio::test]
async fn test_root_entries_are_exactly_app_manifest_scripts() {
    let temp = TempDir::new().unwrap();
    common::write_build_output(&temp.path().join("publish"));
    write_scripts(temp.path());

    let bundle = assemble(&request(temp.path(), true, true)).await.unwrap();

    let mut roots: Vec<String> = common::entry_names(&bundle.archive)
        .iter()
        .map(|name| match name.split_once('/') {
            Some((first, _)) => format!("{first}/"),
            None => name.clone(),
        })
        .collect();
    roots.sort();
    roots.dedup();

    assert_eq!(roots, vec!["app/", "appspec.yml", "scripts/"]);
    assert_eq!(bundle.manifest.as_deref(), Some("appspec.yml"));
    assert!(!bundle.entries.iter().any(|e| e.starts_with("staging")));
}

#[tokio::test]
async fn test_missing_manifest_and_scripts_are_not_fatal() {
    let temp = TempDir::new().unwrap();
    common::write_build_output(&temp.path().join("publish"));

    let mut req = request(temp.path(), false, true);
    req.manifest = Some(temp.path().join("appspec.yml"));
    let bundle = assemble(&req).await.unwrap();

    let names = common::entry_names(&bundle.archive);
    assert!(names.iter().all(|n| n.starts_with("app/")));
    assert!(bundle.manifest.is_none());
    assert!(bundle.scripts.is_empty());
}

#[tokio::test]
async fn test_shell_scripts_have_no_crlf_and_are_executable() {
    let temp = TempDir::new().unwrap();
    common::write_build_output(&temp.path().join("publish"));
    write_scripts(temp.path());

    let bundle = assemble(&request(temp.path(), false, true)).await.unwrap();
    assert_eq!(bundle.scripts, vec!["post-install.sh", "pre-install.sh"]);

    let extracted = temp.path().join("extracted");
    common::extract(&bundle.archive, &extracted);

    let pre = fs::read(extracted.join("scripts/pre-install.sh")).unwrap();
    assert!(!pre.windows(2).any(|w| w == b"\r\n"));
    assert!(pre.starts_with(b"#!/bin/bash\nset -e\n"));
    // Non-scripts are copied verbatim
    assert_eq!(
        fs::read(extracted.join("scripts/notes.txt")).unwrap(),
        b"kept as is\r\n"
    );
    // Source scripts are untouched
    assert!(
        fs::read(temp.path().join("scripts/pre-install.sh"))
            .unwrap()
            .windows(2)
            .any(|w| w == b"\r\n")
    );

    let mut zip =
        zip::ZipArchive::new(fs::File::open(&bundle.archive).unwrap()).unwrap();
    let mode = zip.by_name("scripts/pre-install.sh").unwrap().unix_mode().unwrap();
    assert_eq!(mode & 0o777, 0o755);
}

#[tokio::test]
async fn test_missing_or_empty_build_output_fails() {
    let temp = TempDir::new().unwrap();

    let err = assemble(&request(temp.path(), false, false)).await.unwrap_err();
    assert!(matches!(err, Error::MissingBuildOutput { .. }));

    fs::create_dir_all(temp.path().join("publish")).unwrap();
    let err = assemble(&request(temp.path(), false, false)).await.unwrap_err();
    match err {
        Error::MissingBuildOutput { path } => assert_eq!(path, temp.path().join("publish")),
        other => panic!("expected MissingBuildOutput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rerun_replaces_stale_staging_and_archive() {
    let temp = TempDir::new().unwrap();
    common::write_build_output(&temp.path().join("publish"));
    write_scripts(temp.path());
    let req = request(temp.path(), true, true);

    let first = assemble(&req).await.unwrap();
    let first_dir = temp.path().join("first");
    common::extract(&first.archive, &first_dir);

    // Leftovers from an interrupted run
    fs::write(req.staging_dir.join("app/stale.dll"), b"old").unwrap();
    fs::write(req.staging_dir.join("scripts/old-hook.sh"), b"#!/bin/sh\n").unwrap();

    let second = assemble(&req).await.unwrap();
    let second_dir = temp.path().join("second");
    common::extract(&second.archive, &second_dir);

    assert_eq!(first.entries, second.entries);
    assert_eq!(
        calculate_sha256(&first_dir).await.unwrap(),
        calculate_sha256(&second_dir).await.unwrap()
    );
    assert!(!second_dir.join("app/stale.dll").exists());
    assert!(!second_dir.join("scripts/old-hook.sh").exists());
}

#[tokio::test]
async fn test_build_output_with_only_empty_dirs_fails() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("publish/wwwroot/css")).unwrap();

    let err = assemble(&request(temp.path(), false, false)).await.unwrap_err();

    assert!(matches!(err, Error::MissingBuildOutput { .. }));
    assert!(!temp.path().join("out/bundle.zip").exists());
}

#[tokio::test]
async fn test_staging_or_archive_inside_build_output_is_rejected() {
    let temp = TempDir::new().unwrap();
    let publish = temp.path().join("publish");
    common::write_build_output(&publish);

    let mut req = request(temp.path(), false, false);
    req.staging_dir = publish.join("bundle-staging");
    assert!(assemble(&req).await.is_err());
    assert!(!publish.join("bundle-staging").exists());

    let mut req = request(temp.path(), false, false);
    req.destination = publish.join("bundle.zip");
    assert!(assemble(&req).await.is_err());
    assert!(!publish.join("bundle.zip").exists());

    // Build output is left as it was
    let mut names: Vec<_> = fs::read_dir(&publish)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Shop.Web.dll", "appsettings.json", "wwwroot"]);
}

#[tokio::test]
async fn test_archive_inside_staging_is_rejected() {
    let temp = TempDir::new().unwrap();
    common::write_build_output(&temp.path().join("publish"));

    let mut req = request(temp.path(), false, false);
    req.destination = req.staging_dir.join("bundle.zip");

    assert!(assemble(&req).await.is_err());
}
