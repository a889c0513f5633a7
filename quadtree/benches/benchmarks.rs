use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::quadtree::QuadTree;
use quadtree::shapes::{Point, Rect};
use rand::prelude::*;

const CAPACITY: usize = 8;

fn world() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 1000.0)
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut tree = QuadTree::new(world()).unwrap();

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            let point = world().random_point_inside(&mut rng);
            tree.insert(black_box(point), rng.gen::<u32>(), CAPACITY)
                .unwrap();
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut tree = QuadTree::new(world()).unwrap();
    let mut points = Vec::new();
    for i in 0..10_000u32 {
        let point = world().random_point_inside(&mut rng);
        tree.insert(point, i, CAPACITY).unwrap();
        points.push(point);
    }

    c.bench_function("quadtree_remove_reinsert", |b| {
        b.iter(|| {
            let index = rng.gen_range(0..points.len());
            tree.remove(black_box(points[index]), CAPACITY).unwrap();
            tree.insert(points[index], index as u32, CAPACITY).unwrap();
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut tree = QuadTree::new(world()).unwrap();
    for i in 0..10_000u32 {
        tree.insert(world().random_point_inside(&mut rng), i, CAPACITY)
            .unwrap();
    }

    let mut results = Vec::new();
    c.bench_function("quadtree_query_rect", |b| {
        b.iter(|| {
            results.clear();
            let x = rng.gen_range(0.0..900.0);
            let y = rng.gen_range(0.0..900.0);
            tree.query(black_box(Rect::new(x, y, 100.0, 100.0)), &mut results);
            results.len()
        })
    });

    c.bench_function("quadtree_query_circle", |b| {
        b.iter(|| {
            results.clear();
            let center = world().random_point_inside(&mut rng);
            tree.query_circle(black_box(center), 50.0, &mut results);
            results.len()
        })
    });
}

fn nearest_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut tree = QuadTree::new(world()).unwrap();
    for i in 0..10_000u32 {
        tree.insert(world().random_point_inside(&mut rng), i, CAPACITY)
            .unwrap();
    }

    c.bench_function("quadtree_find_nearest_16", |b| {
        b.iter(|| {
            let target = Point::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0));
            tree.find_nearest(black_box(target), 16)
        })
    });
}

criterion_group!(
    benches,
    insert_benchmark,
    remove_benchmark,
    query_benchmark,
    nearest_benchmark
);
criterion_main!(benches);
