use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use followback_core::{compute_non_mutual, extract_followers};

/// Builds a synthetic export page with `n` follower entries.
fn snapshot(n: usize) -> String {
    let mut html = String::from("<!DOCTYPE html><html><body><main>");
    for i in 0..n {
        html.push_str(&format!(
            r#"<div class="pam"><a href="https://www.instagram.com/user_{i}">user_{i}</a><div>Jan 1, 2024</div></div>"#
        ));
    }
    html.push_str("</main></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let small = snapshot(100);
    let medium = snapshot(1_000);
    let large = snapshot(10_000);

    let mut group = c.benchmark_group("extract_followers");

    group.bench_with_input(BenchmarkId::new("small", 100), &small, |b, html| {
        b.iter(|| extract_followers(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("medium", 1_000), &medium, |b, html| {
        b.iter(|| extract_followers(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("large", 10_000), &large, |b, html| {
        b.iter(|| extract_followers(black_box(html)))
    });

    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let followers = extract_followers(&snapshot(10_000)).unwrap();
    let targets: Vec<String> = (0..5_000).map(|i| format!("user_{}", i * 3)).collect();

    c.bench_function("compute_non_mutual_5k_targets", |b| {
        b.iter(|| compute_non_mutual(black_box(&targets), black_box(&followers), black_box("user_0")))
    });
}

criterion_group!(benches, bench_extract, bench_reconcile);
criterion_main!(benches);
