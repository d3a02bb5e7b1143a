use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use peaktable_core::{Cleaner, FormulaGenerator, Pipeline, Splitter, TransposeConfig, Transposer};
use peaktable_sheet::{Book, CellValue, Sheet};

/// A book of `compounds` instrument sheets with `samples` injections each.
/// The last compound is the normalization compound.
fn instrument_book(compounds: usize, samples: usize) -> Book {
    let mut book = Book::new();
    for c in 0..compounds {
        let name = if c + 1 == compounds {
            "Nor".to_string()
        } else {
            format!("C{c}")
        };

        let mut rows = vec![
            vec![CellValue::from("Compound"), CellValue::from("Method")],
            vec![CellValue::from(name.as_str()), CellValue::from("Quan")],
            vec![CellValue::from("Filename"), CellValue::from("Area"), CellValue::from("RT")],
        ];
        for s in 0..samples {
            rows.push(vec![
                CellValue::String(format!("S{s}")),
                CellValue::Float((c * samples + s) as f64 * 1.5),
                CellValue::Float(c as f64 + 0.1),
            ]);
        }
        book.add_sheet(&name, Sheet::from_rows(rows)).unwrap();
    }
    book
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let config = TransposeConfig::default();
    let book = instrument_book(50, 40);

    let cleaner = Cleaner::new(&config).reset_index(true);
    group.bench_function("clean", |b| b.iter(|| cleaner.clean_book(black_box(book.clone()))));

    let splitter = Splitter::new(&config);
    let cleaned = cleaner.clean_book(book.clone());
    group.bench_function("split", |b| b.iter(|| splitter.split_book(black_box(&cleaned))));

    let transposer = Transposer::new(&config);
    let split = splitter.split_book(&cleaned).unwrap();
    group.bench_function("transpose", |b| b.iter(|| transposer.transpose(black_box(&split))));

    let generator = FormulaGenerator::new(&config);
    let wide = transposer.transpose(&split).unwrap();
    group.bench_function("formulas", |b| b.iter(|| generator.generate(black_box(&wide))));

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = Pipeline::new(TransposeConfig::default()).unwrap();

    for compounds in [10, 100, 500].iter() {
        let book = instrument_book(*compounds, 24);
        group.bench_with_input(BenchmarkId::new("run", compounds), compounds, |b, _| {
            b.iter(|| pipeline.run(black_box(&book)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stages, bench_pipeline);
criterion_main!(benches);
