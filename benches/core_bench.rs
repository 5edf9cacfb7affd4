use airnet_viewer::core::{pick_shape, DocumentSource, LoadSettings, Unmonitored};
use airnet_viewer::render::WorldMesh;
use airnet_viewer::sheet::{document_from_table, SheetTable};
use airnet_viewer::xml::document_from_xml;
use airnet_viewer::{Document, MeshKernel};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use std::hint::black_box;
use std::path::{Path, PathBuf};

const HEADER: &[&str] = &[
    "Link Name",
    "refOrigine",
    "Xorigine",
    "Yorigine",
    "Zorigine",
    "RefExtremite",
    "Xextremite",
    "Yextremite",
    "Zextremite",
    "Section",
];

fn bench_xml_ingestion(c: &mut Criterion) {
    let xml_content = include_str!("../tests/fixtures/network.xml");
    let kernel = MeshKernel::default();

    c.bench_function("xml_ingest_fixture", |b| {
        b.iter(|| {
            let (doc, _) = document_from_xml(
                black_box(xml_content),
                Path::new("network.xml"),
                &kernel,
                LoadSettings::default(),
                &Unmonitored,
            )
            .expect("XML ingest failed");
            black_box(doc.registry.len())
        })
    });
}

/// Kette von `link_count` Links entlang eines Rasters (jeder Node von zwei Links geteilt).
fn build_synthetic_table(link_count: usize) -> SheetTable {
    let rows: Vec<Vec<String>> = (0..link_count)
        .map(|i| {
            let (x0, y0) = ((i % 100) as f64 * 500.0, (i / 100) as f64 * 500.0);
            let j = i + 1;
            let (x1, y1) = ((j % 100) as f64 * 500.0, (j / 100) as f64 * 500.0);
            vec![
                format!("W{i}"),
                format!("N{i}"),
                x0.to_string(),
                y0.to_string(),
                "0".into(),
                format!("N{j}"),
                x1.to_string(),
                y1.to_string(),
                "0".into(),
                format!("S{}", i % 8),
            ]
        })
        .collect();

    SheetTable {
        header: HEADER.iter().map(|s| s.to_string()).collect(),
        rows,
    }
}

fn build_document(link_count: usize, kernel: &MeshKernel) -> Document {
    let (doc, _) = document_from_table(
        &build_synthetic_table(link_count),
        DocumentSource::Spreadsheet(PathBuf::from("bench.xlsx")),
        kernel,
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect("Table build failed");
    doc
}

fn bench_spreadsheet_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("spreadsheet_build");
    let kernel = MeshKernel::default();

    for &link_count in &[100usize, 1_000usize] {
        let table = build_synthetic_table(link_count);
        group.bench_with_input(
            BenchmarkId::new("document_from_table", link_count),
            &table,
            |b, table| {
                b.iter(|| {
                    let (doc, _) = document_from_table(
                        black_box(table),
                        DocumentSource::Spreadsheet(PathBuf::from("bench.xlsx")),
                        &kernel,
                        LoadSettings::default(),
                        &Unmonitored,
                    )
                    .expect("Table build failed");
                    black_box(doc.registry.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_picking(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking");
    let kernel = MeshKernel::default();

    for &link_count in &[100usize, 1_000usize] {
        let doc = build_document(link_count, &kernel);
        let rays: Vec<(DVec3, DVec3)> = (0..64)
            .map(|i| {
                let x = (i % 8) as f64 * 6_000.0;
                let y = (i / 8) as f64 * 600.0;
                (DVec3::new(x, y, 10_000.0), DVec3::NEG_Z)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("pick_batch", link_count),
            &doc,
            |b, doc| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for (origin, dir) in &rays {
                        if pick_shape(&doc.registry, black_box(*origin), *dir, 5.0).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_world_mesh(c: &mut Criterion) {
    let kernel = MeshKernel::default();
    let doc = build_document(1_000, &kernel);

    c.bench_function("world_mesh_1000_links", |b| {
        b.iter(|| {
            let mesh = WorldMesh::from_registry(black_box(&doc.registry));
            black_box(mesh.triangles.len())
        })
    });
}

criterion_group!(
    benches,
    bench_xml_ingestion,
    bench_spreadsheet_build,
    bench_picking,
    bench_world_mesh
);
criterion_main!(benches);
