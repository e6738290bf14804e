//! End-to-end tests for the pixcmp binary.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn pixcmp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pixcmp"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run pixcmp")
}

fn save(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("save png");
    path
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn diff_black_white_precise_and_fast() {
    let dir = tempfile::tempdir().unwrap();
    let black = save(dir.path(), "black.png", &RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])));
    let white = save(dir.path(), "white.png", &RgbaImage::from_pixel(2, 2, Rgba([255; 4])));
    let (a, b) = (black.to_str().unwrap(), white.to_str().unwrap());

    let out = pixcmp(&["diff", a, b]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "score: 113509");

    let out = pixcmp(&["diff", a, b, "--method", "fast"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "score: 883");

    let out = pixcmp(&["diff", a, b, "--method", "fast", "--parallel", "-j", "2"]);
    assert_eq!(stdout(&out).trim(), "score: 883");
}

#[test]
fn diff_threshold_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    let a = save(dir.path(), "a.png", &RgbaImage::from_pixel(4, 4, Rgba([10, 10, 10, 255])));
    let b = save(dir.path(), "b.png", &RgbaImage::from_pixel(4, 4, Rgba([12, 10, 10, 255])));
    let (a, b) = (a.to_str().unwrap(), b.to_str().unwrap());

    let out = pixcmp(&["diff", a, b, "--method", "fast", "--threshold", "100"]);
    assert!(out.status.success());

    let out = pixcmp(&["diff", a, b, "--method", "fast", "--threshold", "1"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("exceeds threshold"));
}

#[test]
fn diff_size_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let a = save(dir.path(), "a.png", &RgbaImage::new(2, 2));
    let b = save(dir.path(), "b.png", &RgbaImage::new(3, 3));

    let out = pixcmp(&["diff", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("bounds not equal"));
}

#[test]
fn diff_missing_file_names_it() {
    let dir = tempfile::tempdir().unwrap();
    let a = save(dir.path(), "a.png", &RgbaImage::new(1, 1));
    let missing = dir.path().join("missing.png");

    let out = pixcmp(&["diff", a.to_str().unwrap(), missing.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.png"));
}

#[test]
fn formats_lists_png() {
    let out = pixcmp(&["formats"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("PNG"));
}
