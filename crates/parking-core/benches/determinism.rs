use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parking_core::{run, InterpreterConfig};

fn busy_script(capacity: usize) -> String {
    let mut script = format!("create {}\n", capacity);
    for i in 0..capacity {
        let color = if i % 3 == 0 { "White" } else { "Red" };
        script.push_str(&format!("park KA{:06} {}\n", i, color));
    }
    for i in (1..=capacity).step_by(2) {
        script.push_str(&format!("leave {}\n", i));
    }
    script.push_str("status\nreg_by_color white\nspot_by_color red\nspot_by_reg KA000004\nexit\n");
    script
}

fn bench_run(c: &mut Criterion) {
    let config = InterpreterConfig::default();
    let script = busy_script(200);

    c.bench_function("run_200_spot_script", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 1024);
            run(black_box(script.as_bytes()), &mut out, &config).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
