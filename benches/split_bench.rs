use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rtelephone::{clean_telephone_number, TELEPHONE_SPLITTER};

/// Mix of well-formed, short, long and non-ASCII input.
fn setup_split_data() -> Vec<&'static str> {
    vec![
        "+441483924732",
        "0441483924732",
        "+4414839",
        "+44 1483 924732 ext. 12",
        "＋４４１４８３９２４７３２",
        "",
    ]
}

fn split_benchmark(c: &mut Criterion) {
    let numbers_to_split = setup_split_data();

    let mut group = c.benchmark_group("Splitting");

    group.bench_function("clean_telephone_number()", |b| {
        b.iter(|| {
            for number in &numbers_to_split {
                let _ = clean_telephone_number(black_box(number));
            }
        })
    });

    group.bench_function("split_strict()", |b| {
        b.iter(|| {
            for number in &numbers_to_split {
                let _ = TELEPHONE_SPLITTER.split_strict(black_box(number));
            }
        })
    });

    group.bench_function("is_viable()", |b| {
        b.iter(|| {
            for number in &numbers_to_split {
                let _ = TELEPHONE_SPLITTER.is_viable(black_box(number));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, split_benchmark);
criterion_main!(benches);
