//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

/// Path of the checked-in sample solution.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shop")
}

/// Copies the sample solution into `dest` so tests can write next to it.
pub fn copy_fixture(dest: &Path) -> PathBuf {
    let src = fixture_root();
    for entry in walkdir::WalkDir::new(&src) {
        let entry = entry.unwrap();
        let target = dest.join(entry.path().strip_prefix(&src).unwrap());
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).unwrap();
        } else {
            std::fs::copy(entry.path(), &target).unwrap();
        }
    }
    dest.to_path_buf()
}

/// Writes a small published web app into `dir`.
pub fn write_build_output(dir: &Path) {
    std::fs::create_dir_all(dir.join("wwwroot/css")).unwrap();
    std::fs::write(dir.join("Shop.Web.dll"), b"MZ\x90\x00\x03").unwrap();
    std::fs::write(dir.join("appsettings.json"), b"{\"Logging\":{}}\r\n").unwrap();
    std::fs::write(dir.join("wwwroot/index.html"), b"<html></html>").unwrap();
    std::fs::write(dir.join("wwwroot/css/site.css"), b"body { margin: 0; }").unwrap();
}

/// Archive entry names in stored order.
pub fn entry_names(archive: &Path) -> Vec<String> {
    let zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    zip.file_names().map(String::from).collect::<Vec<_>>()
}

/// Extracts `archive` into `dest`.
pub fn extract(archive: &Path, dest: &Path) {
    let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    zip.extract(dest).unwrap();
}

/// Writes an executable shell script.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::write(path, body).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// A toolchain stand-in that records its arguments next to itself and
/// publishes a small app, plus a stray archive, into `--output`.
#[cfg(unix)]
pub fn write_fake_toolchain(dir: &Path) -> PathBuf {
    let path = dir.join("fake-dotnet");
    write_script(
        &path,
        r#"#!/bin/sh
set -e
printf '%s\n' "$*" > "$(dirname "$0")/args.txt"
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    --output) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
mkdir -p "$out/wwwroot"
printf 'MZ' > "$out/Shop.Web.dll"
printf '<html></html>' > "$out/wwwroot/index.html"
printf 'PK' > "$out/Shop.Web.zip"
echo "Build succeeded."
"#,
    );
    path
}

/// A toolchain stand-in that fails with a compiler error.
#[cfg(unix)]
pub fn write_failing_toolchain(dir: &Path) -> PathBuf {
    let path = dir.join("broken-dotnet");
    write_script(
        &path,
        "#!/bin/sh\necho 'Program.cs(3,1): error CS1002: ; expected' >&2\nexit 3\n",
    );
    path
}

/// A toolchain stand-in that writes non-UTF-8 text and a large volume of
/// output on both streams before publishing and exiting with `code`.
#[cfg(unix)]
pub fn write_noisy_toolchain(dir: &Path, code: i32) -> PathBuf {
    let path = dir.join("noisy-dotnet");
    write_script(
        &path,
        &format!(
            r#"#!/bin/sh
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    --output) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
printf 'Restored \351t\351\n'
printf 'Avertissement \351\n' >&2
i=0
while [ $i -lt 20000 ]; do
  echo "  Compiling module $i"
  i=$((i + 1))
done
mkdir -p "$out"
printf 'MZ' > "$out/Shop.Web.dll"
echo 'Program.cs(9,5): error CS0103: name does not exist' >&2
exit {code}
"#
        ),
    );
    path
}
