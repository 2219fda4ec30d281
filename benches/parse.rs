use std::path::Path;

use criterion::{Criterion, criterion_group, criterion_main};
use mtl_loader::config::MtlOptions;
use mtl_loader::ingestion::parse_mtl;

/// Generate an MTL library with `n` fully populated materials.
fn make_library(n: usize) -> String {
    let mut mtl = String::from("# synthetic library\n");
    for i in 0..n {
        let f = i as f32 / n as f32;
        mtl.push_str(&format!("newmtl material_{i}\n"));
        mtl.push_str(&format!("Ka {f} {f} {f}\nKd {f} 0.5 0.25\nKs 0.5 0.5 0.5\nKe 0 0 0\n"));
        mtl.push_str("Ns 32.0\nd 1.0\nillum 2\n");
        mtl.push_str(&format!("map_Kd textures/diffuse_{i}.png\n"));
        mtl.push_str(&format!("map_Bump textures/normal_{i}.png\n"));
        mtl.push_str(&format!("map_Ns textures/../rough_{i}.png\n\n"));
    }
    mtl
}

fn bench_parse(c: &mut Criterion) {
    let library = make_library(10_000);
    let base = Path::new("/assets/models");

    c.bench_function("parse_mtl_10k_materials", |b| {
        b.iter(|| parse_mtl(library.lines(), base, &MtlOptions::default()).unwrap());
    });

    let pbr = MtlOptions {
        metallic_roughness: true,
    };
    c.bench_function("parse_mtl_10k_materials_metallic_roughness", |b| {
        b.iter(|| parse_mtl(library.lines(), base, &pbr).unwrap());
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
