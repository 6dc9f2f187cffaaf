// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_docs::app::state::{self, AppState, NavigationPath};
use iced_docs::menu::{self, MENU};
use iced_docs::router;
use iced_docs::ui::drawer;
use std::hint::black_box;

fn route_parsing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");

    group.bench_function("parse_nested_route", |b| {
        b.iter(|| router::parse(black_box("#/components/dialog?tab=api")));
    });

    let path = NavigationPath::from(&["ecosystem", "lab"][..]);
    group.bench_function("format_route", |b| {
        b.iter(|| router::format(black_box(&path)));
    });

    group.finish();
}

fn drawer_selection_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer");
    let current = NavigationPath::from(&["release-notes"][..]);
    let flags = drawer::State::new(false);

    group.bench_function("find_selected_leaf", |b| {
        b.iter(|| menu::find(MENU, black_box(&current)));
    });

    group.bench_function("expanded_sections", |b| {
        b.iter(|| {
            MENU.iter()
                .filter(|entry| entry.is_section())
                .filter(|entry| flags.is_expanded(entry, black_box(&current)))
                .count()
        });
    });

    group.bench_function("set_path_reduction", |b| {
        b.iter(|| {
            state::update(
                AppState::default(),
                state::Message::SetPath(black_box(current.clone())),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, route_parsing_benchmark, drawer_selection_benchmark);
criterion_main!(benches);
