use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecoplot_core::{competition_rhs, CompetitionParams, Figure, RenderOptions};

fn bench_render(c: &mut Criterion) {
    let params = CompetitionParams { r1: 1.0, r2: 0.7, k1: 10.0, k2: 12.0, a21: 0.8, a12: 1.2 };
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[20usize, 60] {
        group.bench_function(format!("quiver_{n}"), |b| {
            let fig = Figure::competition_phase_plane(competition_rhs, &params, n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = fig.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
