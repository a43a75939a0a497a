use std::path::Path;

use dotplate_testkit::{scratch_dir, write_file};

use crate::data::{DataError, Existence, Value, file_exists, file_stat, probe_path, read_bytes};

#[test]
fn exists_reports_files_and_directories() {
	let dir = scratch_dir();
	let file = write_file(dir.path(), "here.txt", "x");

	assert!(file_exists(&file));
	assert!(file_exists(dir.path()));
	assert!(!file_exists(&dir.path().join("gone.txt")));
	assert!(!file_exists(Path::new("")));
	assert_eq!(probe_path(&dir.path().join("gone.txt")), Existence::Absent);
}

#[test]
fn stat_describes_file() {
	let dir = scratch_dir();
	let file = write_file(dir.path(), "sized.bin", [0_u8; 42]);

	let meta = file_stat(&file).expect("stat succeeds");

	assert_eq!(meta.name, "sized.bin");
	assert_eq!(meta.size, 42);
	assert!(!meta.is_dir);
	assert!(meta.modified > 0, "expected a modification time");

	let value = Value::from(meta);
	assert_eq!(value.get("size"), Some(&Value::U64(42)));
	assert_eq!(value.get("is_dir"), Some(&Value::Bool(false)));
}

#[test]
fn stat_marks_directories() {
	let dir = scratch_dir();
	assert!(file_stat(dir.path()).expect("stat on dir succeeds").is_dir);
}

#[test]
fn stat_of_missing_path_fails() {
	let dir = scratch_dir();
	let err = file_stat(&dir.path().join("gone")).expect_err("stat on missing path fails");

	assert!(matches!(err, DataError::Probe { function: "fileStat", .. }));
}

#[test]
fn read_bytes_returns_raw_content() {
	let dir = scratch_dir();
	let file = write_file(dir.path(), "blob.bin", b"\x00\xffabc".as_slice());

	assert_eq!(read_bytes(&file).expect("bytes read"), Value::Bytes(b"\x00\xffabc".to_vec()));
	assert!(matches!(read_bytes(Path::new("")), Err(DataError::MissingProbePath { function: "fileRead" })));
}

#[cfg(unix)]
#[test]
fn denied_probe_is_distinct_but_exists_reports_false() {
	use std::fs;
	use std::os::unix::fs::PermissionsExt;

	let dir = scratch_dir();
	let locked = dir.path().join("locked");
	let inner = write_file(&locked, "inner.txt", "x");
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("mode is set");

	// Privileged users bypass directory permissions.
	let privileged = fs::read_dir(&locked).is_ok();
	let existence = probe_path(&inner);
	let exists = file_exists(&inner);
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("mode is restored");
	if privileged {
		return;
	}

	assert_eq!(existence, Existence::Denied);
	assert!(!exists);
}
