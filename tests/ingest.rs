use pretty_assertions::assert_eq;
use std::io::Write;
use wordtable::{
    ingest, lookup_report, BufferConfig, ByteBuffer, Error, StrView, TableConfig, WordTable,
};

fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(contents).expect("write temp file");
    f.flush().expect("flush temp file");
    f
}

#[test]
fn file_round_trip_through_table() {
    let f = write_temp(b"the cat sat on the mat\nthe end\n");
    let buffer = ByteBuffer::from_path(f.path(), BufferConfig { initial_capacity: 8 }).unwrap();
    assert_eq!(buffer.len(), 31);
    assert_eq!(buffer.capacity(), 32);

    let mut table = WordTable::new().unwrap();
    let stats = ingest(buffer.words(), &mut table).unwrap();
    assert_eq!(stats.tokens, 8);
    assert_eq!(stats.inserted, 6);
    assert_eq!(stats.duplicates, 2);
    assert_eq!(table.len(), 6);
    assert_eq!(lookup_report(&table, StrView::from_literal("mat")), "mat → 3");
    assert_eq!(lookup_report(&table, StrView::from_literal("dog")), "dog not found");
}

#[test]
fn triple_a_counts_once() {
    let f = write_temp(b"a a a");
    let buffer = ByteBuffer::from_path(f.path(), BufferConfig::default()).unwrap();
    let words: Vec<String> = buffer.words().map(|w| w.to_string()).collect();
    assert_eq!(words, ["a", "a", "a"]);

    let mut table = WordTable::new().unwrap();
    ingest(buffer.words(), &mut table).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(StrView::from_literal("a")), Some(&1));
}

#[test]
fn large_vocabulary_grows_table() {
    let text: String = (0..2_000).map(|i| format!("word{} ", i % 700)).collect();
    let f = write_temp(text.as_bytes());
    let buffer = ByteBuffer::from_path(f.path(), BufferConfig::default()).unwrap();

    let mut table = WordTable::with_config(TableConfig::default()).unwrap();
    let stats = ingest(buffer.words(), &mut table).unwrap();
    assert_eq!(stats.tokens, 2_000);
    assert_eq!(table.len(), 700);
    assert_eq!(table.capacity(), 1024);
    assert_eq!(stats.expansions, 2);
    assert_eq!(table.get(StrView::from_literal("word699")), Some(&7));
}

#[test]
fn empty_file_yields_empty_table() {
    let f = write_temp(b"");
    let buffer = ByteBuffer::from_path(f.path(), BufferConfig::default()).unwrap();
    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), 0);

    let mut table = WordTable::new().unwrap();
    let stats = ingest(buffer.words(), &mut table).unwrap();
    assert_eq!(stats.tokens, 0);
    assert!(table.is_empty());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    match ByteBuffer::from_path(&path, BufferConfig::default()) {
        Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected result: {:?}", other.map(|b| b.len())),
    }
}
