use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trailhead::{RouteDef, RouteTable};

fn example_table() -> RouteTable {
    RouteTable::build(vec![
        RouteDef::new("home", "home").default_value("controller", "home"),
        RouteDef::new("item", "item/<id>").constraint("id", r"\d+"),
        RouteDef::new("blog", "blog/<year>/<slug>").constraint("year", r"\d{4}"),
        RouteDef::new("files", "files(/<dir>)/list"),
        RouteDef::new("admin", "admin/(<controller>(/<action>(/<id>)))")
            .default_value("controller", "register")
            .default_value("action", "logout")
            .constraint("action", "login|logout|register")
            .constraint("id", r"\d+"),
        RouteDef::new("catchall", "<section>(/<page>)").default_value("page", "index"),
    ])
    .expect("failed to build bench table")
}

fn bench_resolve(c: &mut Criterion) {
    let table = example_table();

    c.bench_function("resolve_first_route", |b| {
        b.iter(|| table.resolve(black_box("home")))
    });

    c.bench_function("resolve_last_route", |b| {
        b.iter(|| table.resolve(black_box("docs/intro")))
    });

    c.bench_function("resolve_nested_optional", |b| {
        b.iter(|| table.resolve(black_box("admin/register/login/2005")))
    });

    c.bench_function("resolve_no_match", |b| {
        b.iter(|| table.resolve(black_box("no/such/route/anywhere")))
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_table", |b| b.iter(example_table));
}

criterion_group!(benches, bench_resolve, bench_build);
criterion_main!(benches);
