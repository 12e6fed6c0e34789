// benches/decode.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use kbl_decode::{
    config::options::Scope,
    table,
    Decoder, GameRecord,
};

fn load_sample() -> String {
    std::fs::read_to_string("tests/fixtures/S45G01N13.json")
        .expect("read tests/fixtures/S45G01N13.json")
}

fn bench_decode(c: &mut Criterion) {
    let text = load_sample();
    let game = GameRecord::from_json_str(&text).expect("fixture parses");
    let decoder = Decoder::default();

    c.bench_function("decode_parsed", |b| {
        b.iter(|| {
            let report = decoder.decode(black_box(&game)).expect("decodes");
            black_box(report.cumulative.len())
        })
    });

    c.bench_function("decode_from_text", |b| {
        b.iter(|| {
            let report = decoder.decode_str(black_box(&text)).expect("decodes");
            black_box(report.warnings.len())
        })
    });

    let report = decoder.decode(&game).expect("decodes");
    c.bench_function("table_rows_both", |b| {
        b.iter(|| black_box(table::report_rows(black_box(&report), Scope::Both).len()))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
