//! 注册表性能基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use svc_registry::Registry;

/// 测试用的简单服务
struct SimpleService {
    value: i32,
}

/// 基准测试：单例缓存命中
fn bench_singleton_hit(c: &mut Criterion) {
    let mut registry = Registry::new();
    registry.define_singleton("simple", |_| SimpleService { value: 42 });
    registry.resolve("simple");

    c.bench_function("singleton_hit", |b| {
        b.iter(|| {
            let service = registry.resolve_as::<SimpleService>(black_box("simple")).unwrap();
            black_box(service.value)
        })
    });
}

/// 基准测试：瞬态构造
fn bench_transient_construction(c: &mut Criterion) {
    let mut registry = Registry::new();
    registry.define_transient("simple", |_| SimpleService { value: 42 });

    c.bench_function("transient_construction", |b| {
        b.iter(|| {
            let service = registry.resolve_as::<SimpleService>(black_box("simple")).unwrap();
            black_box(service.value)
        })
    });
}

/// 基准测试：依赖链的首次解析
fn bench_dependency_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_chain");

    for depth in [1usize, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| {
                let mut registry = Registry::new();
                registry.define_value("svc0", 0_i32);
                for i in 1..=depth {
                    let dep = format!("svc{}", i - 1);
                    registry.define_singleton(format!("svc{}", i), move |reg: &mut Registry| {
                        reg.resolve_as::<i32>(&dep).map_or(0, |v| *v + 1)
                    });
                }
                let top = registry.resolve_as::<i32>(&format!("svc{}", depth)).unwrap();
                black_box(*top)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_singleton_hit,
    bench_transient_construction,
    bench_dependency_chain
);
criterion_main!(benches);
