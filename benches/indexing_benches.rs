use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::*;

fn san_francisco() -> GeoCoord {
  GeoCoord::from_degrees(37.7749, -122.4194).unwrap()
}

// SF at resolutions 5 and 10
const CELL_RES5: GridIndex = GridIndex(0x85283473fffffff);
const CELL_RES10: GridIndex = GridIndex(0x8a2830828767fff);
const PENTAGON_RES5: GridIndex = GridIndex(0x85080003fffffff);

fn bench_geo_to_index(c: &mut Criterion) {
  let geo = san_francisco();
  let mut group = c.benchmark_group("geo_to_index");
  for res in [0_u8, 5, 10, 15] {
    group.bench_with_input(format!("res_{res}"), &res, |b, &r| {
      b.iter(|| geo_to_index(black_box(&geo), black_box(r)));
    });
  }
  group.finish();
}

fn bench_index_to_geo(c: &mut Criterion) {
  c.benchmark_group("index_to_geo")
    .bench_function("res_5", |b| b.iter(|| index_to_geo(black_box(CELL_RES5))))
    .bench_function("res_10", |b| b.iter(|| index_to_geo(black_box(CELL_RES10))));
}

fn bench_cell_boundary(c: &mut Criterion) {
  c.benchmark_group("cell_boundary")
    .bench_function("hex_res_5", |b| b.iter(|| cell_boundary(black_box(CELL_RES5))))
    .bench_function("hex_res_10", |b| b.iter(|| cell_boundary(black_box(CELL_RES10))))
    .bench_function("pent_res_5", |b| b.iter(|| cell_boundary(black_box(PENTAGON_RES5))));
}

fn bench_is_valid_index(c: &mut Criterion) {
  let wrong_mode = GridIndex(0x05283473fffffff);
  c.benchmark_group("is_valid_index")
    .bench_function("valid", |b| b.iter(|| is_valid_index(black_box(CELL_RES10))))
    .bench_function("wrong_mode", |b| b.iter(|| is_valid_index(black_box(wrong_mode))));
}

fn bench_strings(c: &mut Criterion) {
  c.benchmark_group("strings")
    .bench_function("index_to_string", |b| b.iter(|| index_to_string(black_box(CELL_RES10))))
    .bench_function("write_index_string", |b| {
      let mut buf = [0_u8; MAX_INDEX_STRING_LEN];
      b.iter(|| write_index_string(black_box(CELL_RES10), &mut buf).len());
    })
    .bench_function("string_to_index", |b| b.iter(|| string_to_index(black_box("8a2830828767fff"))));
}

fn bench_hierarchy(c: &mut Criterion) {
  c.benchmark_group("hierarchy")
    .bench_function("to_parent", |b| b.iter(|| to_parent(black_box(CELL_RES10), black_box(5))))
    .bench_function("children_2_levels", |b| b.iter(|| children(black_box(CELL_RES5), black_box(7))));
}

criterion_group!(
  benches,
  bench_geo_to_index,
  bench_index_to_geo,
  bench_cell_boundary,
  bench_is_valid_index,
  bench_strings,
  bench_hierarchy
);
criterion_main!(benches);
