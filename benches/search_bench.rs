//! Benchmarks for engine construction and query latency.
//!
//! Simulates realistic catalog sizes for an educational-content UI:
//! - small:  ~50 items   (one course)
//! - medium: ~500 items  (one school's catalog)
//! - large:  ~5000 items (whole platform)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use findex::testing::{make_engine, CourseItem};

// ============================================================================
// CATALOG SIMULATION
// ============================================================================

/// Catalog size configurations matching real-world scenarios
struct CatalogSize {
    name: &'static str,
    items: usize,
}

const CATALOG_SIZES: &[CatalogSize] = &[
    CatalogSize {
        name: "small",
        items: 50,
    },
    CatalogSize {
        name: "medium",
        items: 500,
    },
    CatalogSize {
        name: "large",
        items: 5000,
    },
];

/// Subject vocabulary for realistic catalog titles
const SUBJECT_WORDS: &[&str] = &[
    "álgebra",
    "geometria",
    "trigonometria",
    "probabilidade",
    "estatística",
    "frações",
    "equações",
    "funções",
    "gramática",
    "interpretação",
    "redação",
    "literatura",
    "história",
    "geografia",
    "biologia",
    "química",
    "física",
    "cinemática",
    "eletricidade",
    "vestibular",
];

const TAG_WORDS: &[&str] = &[
    "matemática",
    "português",
    "ciências",
    "humanas",
    "revisão",
    "simulado",
];

/// Generate a deterministic catalog of the given size. No RNG: a simple
/// multiplicative walk over the word lists keeps runs comparable.
fn generate_catalog(size: usize) -> Vec<CourseItem> {
    (0..size)
        .map(|i| {
            let a = SUBJECT_WORDS[i % SUBJECT_WORDS.len()];
            let b = SUBJECT_WORDS[(i * 7 + 3) % SUBJECT_WORDS.len()];
            let tag = TAG_WORDS[(i * 5 + 1) % TAG_WORDS.len()];
            CourseItem {
                id: format!("item-{}", i),
                title: format!("{} e {} aplicada", a, b),
                description: format!("Módulo {} de {} para {}", i, a, tag),
                tags: vec![tag.to_string()],
            }
        })
        .collect()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in CATALOG_SIZES {
        let catalog = generate_catalog(size.items);
        group.throughput(Throughput::Elements(size.items as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size.name),
            &catalog,
            |b, catalog| b.iter(|| make_engine(black_box(catalog.clone()))),
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in CATALOG_SIZES {
        let engine = make_engine(generate_catalog(size.items));
        for query in ["geo", "algebra aplicada", "simulado matematica", ""] {
            let label = if query.is_empty() { "<empty>" } else { query };
            group.bench_with_input(
                BenchmarkId::new(size.name, label),
                &query,
                |b, query| b.iter(|| engine.search(black_box(query))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
