use std::io::Write;
use supersketch::consts::OUTPUT_EXTENSION;
use supersketch::io::{create_output_file, open_output, write_rows};
use supersketch::sweep::CumulativeRow;
use tempfile::tempdir;

#[test]
fn directory_gets_default_file_name() {
    let dir = tempdir().unwrap();

    create_output_file(dir.path(), OUTPUT_EXTENSION).unwrap();

    assert!(dir.path().join("supersketch.tsv").is_file());
}

#[test]
fn file_path_gets_extension() {
    let dir = tempdir().unwrap();
    let location = dir.path().join("run");

    let mut writer = open_output(Some(location.as_path())).unwrap();
    write_rows(&mut writer, &[CumulativeRow { k: 0, value: 0.5 }]).unwrap();
    drop(writer);

    let written = dir.path().join("run.supersketch.tsv");
    assert!(written.is_file());
    assert!(!location.exists());
    assert_eq!(std::fs::read_to_string(written).unwrap(), "0\t0.5\n");
}

#[test]
fn missing_parent_directory_fails() {
    let dir = tempdir().unwrap();
    let location = dir.path().join("missing").join("run");

    assert!(create_output_file(&location, OUTPUT_EXTENSION).is_err());
    assert!(open_output(Some(location.as_path())).is_err());
}

#[test]
fn stdout_when_no_location() {
    let mut writer = open_output(None).unwrap();
    writer.flush().unwrap();
}
