//! Integration tests for adapters_io_operations crate
//!
//! These tests exercise reading digit files and writing artifacts against a
//! real temporary directory.

use std::fs;

use adapters_io_operations::*;
use entities_utilities::Radix;

#[test]
fn test_read_then_write_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pi_dec_1024.txt");
    fs::write(&input, "14159265\n").unwrap();

    let buffer = DigitFile::read(&input).unwrap();
    assert_eq!(buffer, b"14159265\n");

    let stem = DigitFile::stem(&input);
    let writer = ArtifactWriter::new(dir.path());
    let path = writer
        .write(&stem, Radix::new(16).unwrap(), 5, "BDCOF")
        .unwrap();

    assert_eq!(path.file_name().unwrap(), "pi_dec_1024_base16_5.txt");
    assert_eq!(fs::read_to_string(path).unwrap(), "BDCOF");
}

#[test]
fn test_rewriting_an_artifact_replaces_it() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ArtifactWriter::new(dir.path());
    let radix = Radix::new(27).unwrap();

    let first = writer.write("pi", radix, 3, "ABC").unwrap();
    let second = writer.write("pi", radix, 3, "ABC").unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "ABC");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_distinct_radices_get_distinct_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ArtifactWriter::new(dir.path());
    let a = writer.path_for("pi", Radix::new(16).unwrap(), 6);
    let b = writer.path_for("pi", Radix::new(27).unwrap(), 6);
    assert_ne!(a, b);
}

#[test]
fn test_large_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("big.txt");
    let digits = "1234567890".repeat(100_000);
    fs::write(&input, &digits).unwrap();

    let buffer = DigitFile::read(&input).unwrap();
    assert_eq!(buffer.len(), 1_000_000);
    assert_eq!(buffer, digits.as_bytes());
}

#[test]
fn test_error_messages_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let err = DigitFile::read(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.txt"));
}
