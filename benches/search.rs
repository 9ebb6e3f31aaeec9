//! Criterion benchmarks for search resolution and form validation.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dreamknot::catalog::Catalog;
use dreamknot::search::{self, SearchInput};
use dreamknot::validation::{validate_form, FieldInput, FieldKind};

/// Queries that hit on id, title, location substring, and nothing.
fn bench_resolve(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(1));

    for query in ["goa", "Jaipur", "rajasthan", "atlantis"] {
        let input = SearchInput::query(query);
        group.bench_with_input(BenchmarkId::from_parameter(query), &input, |b, input| {
            b.iter(|| black_box(search::resolve(&catalog, black_box(input))));
        });
    }

    group.bench_function("type_filter_only", |b| {
        let input = SearchInput::query("  ").with_type_filter("palace");
        b.iter(|| black_box(search::resolve(&catalog, black_box(&input))));
    });

    group.finish();
}

fn bench_validate_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_form");

    let valid = [
        FieldInput::required("name", FieldKind::Text, "Asha Rao"),
        FieldInput::required("email", FieldKind::Email, "asha@example.com"),
        FieldInput::required("phone", FieldKind::Tel, "+91 (98) 7654-3210"),
        FieldInput::required("destination", FieldKind::Select, "udaipur"),
        FieldInput::optional("message", FieldKind::TextArea, ""),
    ];
    let invalid = [
        FieldInput::required("name", FieldKind::Text, "   "),
        FieldInput::required("email", FieldKind::Email, "asha@example"),
        FieldInput::required("phone", FieldKind::Tel, "12345"),
        FieldInput::required("destination", FieldKind::Select, ""),
        FieldInput::optional("message", FieldKind::TextArea, ""),
    ];

    group.throughput(Throughput::Elements(valid.len() as u64));
    group.bench_function("enquiry_valid", |b| {
        b.iter(|| black_box(validate_form(black_box(&valid))));
    });
    group.bench_function("enquiry_invalid", |b| {
        b.iter(|| black_box(validate_form(black_box(&invalid))));
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_validate_form);
criterion_main!(benches);
