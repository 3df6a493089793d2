// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmarks for forward and reverse translation
//!
//! Run with: cargo bench -p hvac-bridge-translator

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hvac_bridge_model::{fields::os, FieldValue, Model, ObjectGraph, ObjectType};
use hvac_bridge_translator::{ForwardTranslator, ReverseTranslator, TranslatorOptions};

// =============================================================================
// Test Model Generation
// =============================================================================

/// Refrigeration racks sharing one curve, plus a ring of matched surfaces
fn create_model(systems: usize, compressors_per_system: usize) -> Model {
    let mut model = Model::new();
    let curve = model.create_object(ObjectType::OsCurveCubic, "Curve");
    for field in 1..=4 {
        let _ = model.set_field(curve, field, FieldValue::Real(0.5));
    }

    for i in 0..systems {
        let system = model.create_object(ObjectType::OsRefrigerationSystem, &format!("Rack {}", i));
        let list = model.create_object(ObjectType::OsModelObjectList, "");
        let cases = model.create_object(ObjectType::OsModelObjectList, "");
        let _ = model.set_pointer(system, os::refrigeration_system::COMPRESSOR_LIST, list);
        let _ = model.set_pointer(system, os::refrigeration_system::CASE_AND_WALKIN_LIST, cases);

        for j in 0..compressors_per_system {
            let c = model.create_object(
                ObjectType::OsRefrigerationCompressor,
                &format!("Rack {} Compressor {}", i, j),
            );
            let _ = model.set_pointer(c, os::refrigeration_compressor::POWER_CURVE, curve);
            let _ = model.set_pointer(c, os::refrigeration_compressor::CAPACITY_CURVE, curve);
            let _ = model.append_to_list(list, c);
        }
    }

    let surfaces: Vec<_> = (0..systems)
        .map(|i| model.create_object(ObjectType::OsSurface, &format!("Wall {}", i)))
        .collect();
    for (i, &surface) in surfaces.iter().enumerate() {
        let next = surfaces[(i + 1) % surfaces.len()];
        let _ = model.set_pointer(surface, os::surface::OUTSIDE_BOUNDARY_CONDITION_OBJECT, next);
    }
    model
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");
    for systems in [10, 100, 500] {
        let model = create_model(systems, 4);
        group.throughput(Throughput::Elements(model.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(systems), &model, |b, model| {
            b.iter(|| {
                let mut translator = ForwardTranslator::with_options(
                    TranslatorOptions::new().with_version_object(false),
                );
                black_box(translator.translate_model(black_box(model)))
            });
        });
    }
    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for systems in [10, 100, 500] {
        let workspace = ForwardTranslator::new().translate_model(&create_model(systems, 4));
        group.throughput(Throughput::Elements(workspace.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(systems),
            &workspace,
            |b, workspace| {
                b.iter(|| black_box(ReverseTranslator::new().translate_workspace(black_box(workspace))));
            },
        );
    }
    group.finish();
}

fn bench_unsorted_visit(c: &mut Criterion) {
    let model = create_model(200, 4);
    c.bench_function("forward_unsorted_200", |b| {
        b.iter(|| {
            let mut translator = ForwardTranslator::with_options(
                TranslatorOptions::new()
                    .with_version_object(false)
                    .with_name_sorting(false),
            );
            black_box(translator.translate_model(black_box(&model)))
        });
    });
}

criterion_group!(benches, bench_forward, bench_reverse, bench_unsorted_visit);
criterion_main!(benches);
