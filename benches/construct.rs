use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use lyndon_saca::{build_ds1, build_ds3, prepare, SuffixArray};
use rand::random;
use std::ops::Range;

const LEN: usize = 1 << 14;

criterion_group!(benches, small_scale, big_scale, periodic, wide_sort_prefix);
criterion_main!(benches);

fn small_scale(c: &mut Criterion) {
    c.bench_function("construct scale-", |b| bench_by(b, 1..4));
}

fn big_scale(c: &mut Criterion) {
    c.bench_function("construct scale+", |b| bench_by(b, 1..250));
}

fn periodic(c: &mut Criterion) {
    // long arithmetic chains, the regime the group finalization is
    // built for
    c.bench_function("construct periodic", |b| {
        let data: Vec<u8> = (0..LEN).map(|i| b"aab"[i % 3]).collect();
        b.iter(|| SuffixArray::new(&data));
    });
}

fn wide_sort_prefix(c: &mut Criterion) {
    c.bench_function("construct ds1 vs ds3", |b| {
        let (text, _) = prepare::prepare_bytes(&gen_bytes(1..120));
        let mut sa = vec![0u32; text.len()];
        b.iter(|| {
            build_ds1(&text, &mut sa);
            build_ds3(&text, &mut sa);
        });
    });
}

fn bench_by(b: &mut Bencher, scale: Range<u8>) {
    let data = gen_bytes(scale);
    b.iter(|| SuffixArray::new(&data));
}

fn gen_bytes(scale: Range<u8>) -> Vec<u8> {
    let k = scale.start + random::<u8>() % (scale.end - scale.start);
    (0..LEN).map(|_| random::<u8>() % k).collect()
}
