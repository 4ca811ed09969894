use criterion::{black_box, criterion_group, Criterion};
use falling_sand::physics::fallingsand::data::sand_grid::SandGrid;
use falling_sand::physics::fallingsand::elements::movement::tie_break::RngTieBreak;
use falling_sand::physics::fallingsand::util::vectors::RcVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A 128x128 grid with the top half sprinkled with sand
fn get_sand_grid() -> SandGrid {
    let mut rng = StdRng::seed_from_u64(0);
    let mut sand_grid = SandGrid::new_empty(128, 128).unwrap();
    for row in 0..64 {
        for col in 0..128 {
            if rng.gen_bool(0.5) {
                sand_grid.activate_mut(RcVector::new(row, col)).unwrap();
            }
        }
    }
    sand_grid
}

fn bench_step(c: &mut Criterion) {
    let sand_grid = get_sand_grid();
    let mut tie_break = RngTieBreak(StdRng::seed_from_u64(1));
    c.bench_function("sand_grid_step", |b| {
        b.iter(|| black_box(&sand_grid).step(&mut tie_break))
    });
}

fn bench_texture(c: &mut Criterion) {
    let sand_grid = get_sand_grid();
    c.bench_function("sand_grid_texture", |b| {
        b.iter(|| black_box(&sand_grid).get_texture())
    });
}

criterion_group!(benches, bench_step, bench_texture);
