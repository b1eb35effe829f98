use cinema_booking::models::CatalogEntry;
use cinema_booking::services::{seed_catalog, MovieService};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use std::thread;

fn service(capacity: u32) -> Arc<MovieService> {
    let mut service = MovieService::new(capacity);
    seed_catalog(
        &mut service,
        &[
            CatalogEntry::new("Dune", &["Rex", "Odeon"]),
            CatalogEntry::new("Tenet", &["Rex"]),
        ],
    );
    Arc::new(service)
}

fn bench_available_seats(c: &mut Criterion) {
    let service = service(200);
    c.bench_function("available_seats/200", |b| {
        b.iter(|| service.available_seats(black_box("Dune"), black_box("Rex")))
    });
}

fn bench_sell_out(c: &mut Criterion) {
    c.bench_function("sell_out/20_seats_single_thread", |b| {
        b.iter(|| {
            let service = service(20);
            for seat in 1..=20 {
                let _ = service.book_seats("Dune", "Rex", &[black_box(seat)]);
            }
        })
    });
}

fn bench_contended(c: &mut Criterion) {
    c.bench_function("sell_out/20_seats_8_threads_same_theater", |b| {
        b.iter(|| {
            let service = service(20);
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let service = Arc::clone(&service);
                    thread::spawn(move || {
                        for seat in 1..=20 {
                            let _ = service.book_seats("Dune", "Rex", &[seat]);
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        })
    });
}

criterion_group!(benches, bench_available_seats, bench_sell_out, bench_contended);
criterion_main!(benches);
