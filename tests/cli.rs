use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output};

fn wordtable(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordtable"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn wordtable")
}

fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(contents).expect("write temp file");
    f.flush().expect("flush temp file");
    f
}

#[test]
fn success_prints_lookup_and_exits_zero() {
    let f = write_temp(b"the cat sat on the mat\n");
    let out = wordtable(&[f.path().as_os_str()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "the → 3\n");
}

#[test]
fn absent_key_is_reported_not_found() {
    let f = write_temp(b"alpha beta");
    let out = wordtable(&[f.path().as_os_str(), OsStr::new("--key"), OsStr::new("gamma")]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "gamma not found\n");
}

#[test]
fn missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let out = wordtable(&[path.as_os_str()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.txt"));
}

#[test]
fn invalid_load_factor_exits_one() {
    let f = write_temp(b"the");
    let out = wordtable(&[
        f.path().as_os_str(),
        OsStr::new("--load-factor"),
        OsStr::new("1.5"),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("load factor"));
}
