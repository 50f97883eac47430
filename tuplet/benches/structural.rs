use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, Criterion};
use criterion::measurement::WallTime;
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};
use tuplet::{Generic, Nona, Pair, Quad, Tuple};

fn bench_tuple<T>(g: &mut BenchmarkGroup<WallTime>, name: &str, a: T, b: T)
where
    T: Tuple + Ord + Hash + std::fmt::Display,
{
    let _ = g.bench_function(format!("{}/compare", name), |bench| {
        bench.iter(|| black_box(&a).cmp(black_box(&b)))
    });
    let _ = g.bench_function(format!("{}/equals", name), |bench| {
        bench.iter(|| black_box(&a) == black_box(&b))
    });
    let _ = g.bench_function(format!("{}/hash", name), |bench| {
        bench.iter(|| {
            let mut hasher = DefaultHasher::new();
            black_box(&a).hash(&mut hasher);
            hasher.finish()
        })
    });
    let _ = g.bench_function(format!("{}/display", name), |bench| {
        bench.iter(|| black_box(&a).to_string())
    });
}

fn fixed_arity(c: &mut Criterion) {
    let mut g = c.benchmark_group("fixed");
    bench_tuple(&mut g, "pair", Pair::of(1u64, "a"), Pair::of(1u64, "b"));
    bench_tuple(&mut g, "quad", Quad::of(1, 2, 3, 4), Quad::of(1, 2, 3, 5));
    bench_tuple(
        &mut g,
        "nona",
        Nona::of(1, 2, 3, 4, 5, 6, 7, 8, 9),
        Nona::of(1, 2, 3, 4, 5, 6, 7, 8, 10),
    );
    let pair = Pair::of(1u64, "a");
    let _ = g.bench_function("pair/template", |bench| {
        bench.iter(|| black_box(&pair).to_string_with("%2$s=%1$s"))
    });
    g.finish();
}

fn generic(c: &mut Criterion) {
    let mut g = c.benchmark_group("generic");
    for len in [4usize, 64, 1024].iter().copied() {
        let a = Generic::of(0..len as u64);
        let b = Generic::of((0..len as u64).map(|n| if n + 1 == len as u64 { n + 1 } else { n }));
        let _ = g.bench_function(format!("compare/{}", len), |bench| {
            bench.iter(|| black_box(&a).compare_to(Some(black_box(&b))))
        });
        let _ = g.bench_function(format!("get/{}", len), |bench| {
            bench.iter(|| black_box(&a).get(black_box(len / 2)))
        });
    }
    g.finish();
}

criterion_group!(benches, fixed_arity, generic);
criterion_main!(benches);
