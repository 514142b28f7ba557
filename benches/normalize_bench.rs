use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tweetnorm::{NormalizeConfig, Pipeline, RawDocument};

fn bench_normalize(c: &mut Criterion) {
    let pipeline = Pipeline::new(NormalizeConfig::default()).expect("valid config");
    let mut group = c.benchmark_group("normalize");

    let tweet = "I luv this!! 😍😍 check http://x.co #great stuff happening here today ";
    for repeats in [1, 8, 64].iter() {
        let text = tweet.repeat(*repeats);
        let doc = RawDocument::from(text.as_str());
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("repeats_{repeats}"), |b| {
            b.iter(|| black_box(&pipeline).normalize(black_box(&doc)))
        });
    }

    group.finish();
}

fn bench_normalize_batch(c: &mut Criterion) {
    let pipeline = Pipeline::new(NormalizeConfig::default()).expect("valid config");
    let docs: Vec<RawDocument> = (0..512)
        .map(|i| RawDocument::from(format!("tweet number {i} with some 😍 noise http://t.co/x")))
        .collect();

    let mut group = c.benchmark_group("normalize_batch");
    group.throughput(Throughput::Elements(docs.len() as u64));
    group.bench_function("docs_512", |b| {
        b.iter(|| black_box(&pipeline).normalize_batch(black_box(&docs)))
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_normalize_batch);
criterion_main!(benches);
