use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_intrusive::Node;
use mola_intrusive::linked_list::intrusive::{
    double::DoubleLink, forward::SList, list::List, single::SingleLink,
};
use rand::seq::SliceRandom;
use std::hint::black_box;
use std::pin::pin;
use std::ptr::NonNull;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

#[derive(Node)]
struct Entry {
    value: usize,
    #[node(field = Queue)]
    queue: DoubleLink,
    #[node(field = Spare)]
    spare: DoubleLink,
    #[node(field = Free)]
    free: SingleLink,
}

fn entries(n: usize) -> Vec<Entry> {
    (0..n)
        .map(|value| Entry {
            value,
            queue: DoubleLink::new(),
            spare: DoubleLink::new(),
            free: SingleLink::new(),
        })
        .collect()
}

fn push_pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_push_pop");
    for size in SIZES {
        let entries = entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut list = pin!(List::<Queue>::new());
                for entry in &entries {
                    unsafe { list.as_mut().push_back(NonNull::from(entry)) };
                }
                while let Some(entry) = list.as_mut().pop_front() {
                    black_box(entry);
                }
            });
        });
    }
    group.finish();
}

fn rotate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_rotate");
    for size in SIZES {
        let entries = entries(size);
        let mut list = Box::pin(List::<Queue>::new());
        for entry in &entries {
            unsafe { list.as_mut().push_back(NonNull::from(entry)) };
        }
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                for _ in 0..size {
                    list.as_mut().rotate_left();
                }
                black_box(list.front());
            });
        });
    }
    group.finish();
}

fn random_remove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_random_remove");
    for size in SIZES {
        let entries = entries(size);
        let mut order: Vec<usize> = (0..size).collect();
        order.shuffle(&mut rand::rng());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut list = pin!(List::<Queue>::new());
                for entry in &entries {
                    unsafe { list.as_mut().push_back(NonNull::from(entry)) };
                }
                for &i in &order {
                    unsafe { list.as_mut().remove(NonNull::from(&entries[i])) };
                }
                black_box(list.is_empty());
            });
        });
    }
    group.finish();
}

fn splice_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_splice");
    for size in SIZES {
        let entries = entries(size);
        let mut a = Box::pin(List::<Spare>::new());
        let mut b_list = Box::pin(List::<Spare>::new());
        for entry in &entries {
            unsafe { a.as_mut().push_back(NonNull::from(entry)) };
        }
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                b_list.as_mut().splice_back(a.as_mut());
                a.as_mut().splice_front(b_list.as_mut());
                black_box(a.is_empty());
            });
        });
    }
    group.finish();
}

fn slist_remove_if_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("slist_remove_if");
    for size in SIZES {
        let entries = entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut list = SList::<Free>::new();
                for entry in &entries {
                    unsafe { list.push_front(NonNull::from(entry)) };
                }
                let removed = list.remove_if(|entry| entry.value % 3 == 0);
                black_box(removed);
                black_box(list.clear());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    push_pop_benchmark,
    rotate_benchmark,
    random_remove_benchmark,
    splice_benchmark,
    slist_remove_if_benchmark
);
criterion_main!(benches);
