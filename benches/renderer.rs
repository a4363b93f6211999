use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kpi_radar::color::ColorEngine;
use kpi_radar::config::RadarConfig;
use kpi_radar::parser::{extract_score_table, split_around_table};
use kpi_radar::render::render_radar_svg;
use kpi_radar::theme::Theme;
use std::hint::black_box;

fn synthetic_report(companies: usize, categories: usize) -> String {
    let mut out = String::from("# Synthetic benchmark\n\nSome prose before the table.\n\n");
    out.push_str("| KPI Category |");
    for c in 0..companies {
        out.push_str(&format!(" Company {} |", c));
    }
    out.push_str("\n|---|");
    for _ in 0..companies {
        out.push_str("---|");
    }
    out.push('\n');
    for r in 0..categories {
        out.push_str(&format!("| Category {} |", r));
        for c in 0..companies {
            out.push_str(&format!(" {}.{} |", (r + c) % 6, (r * 7 + c) % 10));
        }
        out.push('\n');
    }
    out.push_str("\nClosing remarks.\n");
    out
}

fn fixture(name: &str) -> &'static str {
    match name {
        "full_report" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/benches/fixtures/full_report.md"
        )),
        "many_categories" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/benches/fixtures/many_categories.md"
        )),
        _ => panic!("unknown fixture {name}"),
    }
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for name in ["full_report", "many_categories"] {
        let input = fixture(name);
        group.bench_with_input(BenchmarkId::new("table", name), input, |b, input| {
            b.iter(|| extract_score_table(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("split", name), input, |b, input| {
            b.iter(|| split_around_table(black_box(input)))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::default();
    let config = RadarConfig::default();
    let title = Some("Performance Comparison");
    let mut group = c.benchmark_group("render_svg");
    for (companies, categories) in [(3, 4), (6, 12), (12, 30)] {
        let report = synthetic_report(companies, categories);
        let Some(table) = extract_score_table(&report) else {
            continue;
        };
        let id = format!("{companies}x{categories}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &table, |b, table| {
            b.iter(|| render_radar_svg(black_box(table), title, &theme, &config))
        });
    }
    group.finish();
}

fn bench_colors(c: &mut Criterion) {
    let theme = Theme::default();
    let config = RadarConfig::default();
    c.bench_function("colors/assign_30", |b| {
        b.iter(|| ColorEngine::new(&theme, &config).assign_all(black_box(30)))
    });
}

criterion_group!(benches, bench_extract, bench_render, bench_colors);
criterion_main!(benches);
