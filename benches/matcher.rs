// Matcher hot-loop benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use opcheck::keywords::KeywordTable;
use opcheck::matcher::line_contains_token;

const LINE: &str = r#"db.orders.aggregate([{ "$match": { "status": "A" } }, { "$group": { "_id": "$cust_id", "total": { "$sum": "$amount" } } }])"#;

fn bench_single_token(c: &mut Criterion) {
    c.bench_function("matcher/single_token", |b| {
        b.iter(|| line_contains_token(black_box(LINE), black_box("$sum")))
    });
}

fn bench_full_table(c: &mut Criterion) {
    let table = KeywordTable::global();
    c.bench_function("matcher/full_table_line", |b| {
        b.iter(|| {
            table
                .entries()
                .iter()
                .filter(|entry| line_contains_token(black_box(LINE), entry.token))
                .count()
        })
    });
}

criterion_group!(benches, bench_single_token, bench_full_table);
criterion_main!(benches);
