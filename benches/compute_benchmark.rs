use criterion::{Criterion, black_box, criterion_group, criterion_main};
use arith_rs::lexer::tokenize;
use arith_rs::parser::parse_tokens;
use arith_rs::{Evaluator, compute};
use bumpalo::Bump;

const EXPRESSIONS: &[&str] = &[
    "2+3*4",
    "8-3-2",
    "-1+-2.1",
    "1 + ( 2.5 * 3 - ( 4 / 5.7 ) - 6.01 ) + 7",
    "(1+2)(3+4)(5+6)-(7-8)/-(9)",
    "((((((((((1))))))))))+2*3/4-5",
];

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    group.bench_function("compute_fresh_evaluator", |b| {
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(compute(black_box(expr)));
            }
        });
    });

    group.bench_function("compute_reused_evaluator", |b| {
        let mut evaluator = Evaluator::with_capacity(16 * 1024);
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(evaluator.compute(black_box(expr)));
            }
        });
    });

    group.bench_function("validate_only", |b| {
        let mut evaluator = Evaluator::new();
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(evaluator.validate(black_box(expr)));
            }
        });
    });

    group.bench_function("tokenize_and_build", |b| {
        let mut arena = Bump::with_capacity(16 * 1024);
        b.iter(|| {
            for expr in EXPRESSIONS {
                let tokens = tokenize(black_box(expr)).unwrap();
                black_box(parse_tokens(&tokens, &arena).unwrap());
            }
            arena.reset();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
