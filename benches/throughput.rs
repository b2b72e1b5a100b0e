use criterion::{criterion_group, criterion_main, Criterion};
use resgen::generator::{generate_resource, inflect, ResourceOptions, TransportStyle};
use std::hint::black_box;

fn bench_inflect(c: &mut Criterion) {
    c.bench_function("inflect", |b| {
        b.iter(|| inflect(black_box("_blogPostComments")).unwrap())
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_resource");
    for style in TransportStyle::ALL {
        let options = ResourceOptions::new("users")
            .with_style(style)
            .with_stub_suffix("test");
        group.bench_function(style.as_str(), |b| {
            b.iter(|| generate_resource(black_box(&options)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_inflect, bench_generate);
criterion_main!(benches);
