use criterion::{black_box, criterion_group, criterion_main, Criterion};
use philjs::prelude::*;

pub fn bench(c: &mut Criterion) {
    c.bench_function("reactivity_signals", |b| {
        b.iter(|| {
            create_root(|| {
                let state = create_signal(black_box(0));

                for _i in 0..1000 {
                    let value = state.get();
                    state.set(value + 1);
                }
            })
            .dispose();
        })
    });

    c.bench_function("reactivity_effects", |b| {
        b.iter(|| {
            create_root(|| {
                let state = create_signal(black_box(0));
                create_effect(move || {
                    let _double = state.get() * 2;
                });

                for _i in 0..1000 {
                    state.set(state.get() + 1);
                }
            })
            .dispose();
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().noise_threshold(0.05 /* noisy CI */);
    targets = bench
}
criterion_main!(benches);
