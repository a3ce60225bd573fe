use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use wordtable::{ingest, StrView, TableConfig, WordTable, Words};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    let keys: Vec<String> = lcg(1).take(10_000).map(key).collect();
    c.bench_function("word_table_insert_10k", |b| {
        b.iter_batched(
            || WordTable::with_config(TableConfig::default()).unwrap(),
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.insert_growing(StrView::from(k.as_str()), i as i64).unwrap();
                }
                black_box(t.len())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    let keys: Vec<String> = lcg(7).take(20_000).map(key).collect();
    let mut t = WordTable::new().unwrap();
    for (i, k) in keys.iter().enumerate() {
        t.insert_growing(StrView::from(k.as_str()), i as i64).unwrap();
    }
    let mut it = keys.iter().cycle();
    c.bench_function("word_table_get_hit", |b| {
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(StrView::from(k.as_str())));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    let keys: Vec<String> = lcg(11).take(10_000).map(key).collect();
    let mut t = WordTable::new().unwrap();
    for (i, k) in keys.iter().enumerate() {
        t.insert_growing(StrView::from(k.as_str()), i as i64).unwrap();
    }
    let mut miss = lcg(0xdead_beef);
    c.bench_function("word_table_get_miss", |b| {
        b.iter(|| {
            // generate keys unlikely in the table
            let k = key(miss.next().unwrap());
            black_box(t.get(StrView::from(k.as_str())));
        })
    });
}

fn bench_ingest_text(c: &mut Criterion) {
    let text: String = lcg(3)
        .take(50_000)
        .map(|x| format!("w{} ", x % 5_000))
        .collect();
    c.bench_function("word_table_ingest_50k_words", |b| {
        b.iter(|| {
            let mut t = WordTable::new().unwrap();
            let stats = ingest(Words::new(text.as_bytes()), &mut t).unwrap();
            black_box((stats, t.len()))
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_ingest_text
}
criterion_main!(benches);
