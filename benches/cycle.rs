use criterion::{criterion_group, criterion_main, Criterion, black_box};

use glam::Vec2;

use daycycle::atmosphere::{CelestialCycle, CycleConfig};
use daycycle::controller::{FirstPersonController, MoveInput, MovementConfig};

fn bench_cycle_tick(c: &mut Criterion) {
    let mut cycle = CelestialCycle::new(CycleConfig::default()).unwrap();

    c.bench_function("cycle_tick", |b| {
        b.iter(|| cycle.tick(black_box(1.0 / 60.0)));
    });
}

fn bench_cycle_uniform(c: &mut Criterion) {
    let cycle = CelestialCycle::new(CycleConfig::default()).unwrap();

    c.bench_function("cycle_uniform", |b| {
        b.iter(|| black_box(&cycle).uniform());
    });
}

fn bench_first_person_update(c: &mut Criterion) {
    let mut controller = FirstPersonController::new(MovementConfig::default()).unwrap();
    let input = MoveInput {
        move_axis: Vec2::new(0.7, 0.7),
        look_delta: Vec2::new(1.5, -0.5),
        jump_pressed: false,
    };

    c.bench_function("first_person_update", |b| {
        b.iter(|| controller.update(black_box(&input), true, black_box(1.0 / 60.0)));
    });
}

criterion_group!(benches, bench_cycle_tick, bench_cycle_uniform, bench_first_person_update);
criterion_main!(benches);
