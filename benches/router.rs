use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use resource_router::{Method, Resources, Router};

fn build_router() -> Router {
    let mut router = Router::new();
    router.namespace("api", |api| {
        api.resources("tags", Resources::all())
            .resources("images", Resources::all())
            .resources("filters", Resources::all());
    });
    router.get("profile", "users#show");
    router
}

fn router_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-resolve");

    let router = build_router();

    group.bench_function("collection", |b| {
        b.iter_with_large_drop(|| router.resolve("/api/images", &Method::GET))
    });

    group.bench_function("member", |b| {
        b.iter_with_large_drop(|| {
            router.resolve("/api/images/507f1f77bcf86cd799439011", &Method::GET)
        })
    });

    group.bench_function("miss", |b| {
        b.iter_with_large_drop(|| router.resolve("/api/unknown", &Method::GET))
    });
}

fn router_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-register");

    group.bench_function("resources", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router| {
                router.resources("images", Resources::all());
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, router_resolve, router_register);
criterion_main!(benches);
