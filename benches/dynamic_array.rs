use std::{collections::VecDeque, hint::black_box};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use dynarray::DynamicArray;
use smallvec::SmallVec;
use arrayvec::ArrayVec;


pub fn ends(c: &mut Criterion) {

    let mut group = c.benchmark_group("Back Ops");
    group.sample_size(1000);
    group.bench_function(
        BenchmarkId::new("DynamicArray", "push"),
        |b| b.iter_batched_ref(
            || DynamicArray::<u8>::new(),
            |array| black_box({ array.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("DynamicArray", "push-grow"),
        |b| b.iter_batched_ref(
            || DynamicArray::<u8>::from([1; 8]),
            |array| black_box({ array.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "push"),
        |b| b.iter_batched_ref(
            || Vec::<u8>::with_capacity(8),
            |vec| black_box({ vec.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "push"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 8]>::new(),
            |vec| black_box({ vec.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "push"),
        |b| b.iter_batched_ref(
            || ArrayVec::<u8, 8>::new(),
            |vec| black_box({ vec.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynamicArray", "pop"),
        |b| b.iter_batched_ref(
            || DynamicArray::<u8>::from([0, 1, 2, 3]),
            |array| black_box({ let _ = array.pop(); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "pop"),
        |b| b.iter_batched_ref(
            || { let mut vec: Vec<u8> = vec![0, 1, 2, 3]; vec.reserve_exact(4); vec },
            |vec| black_box({ let _ = vec.pop(); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "pop"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 8]>::from_vec(vec![0, 1, 2, 3]),
            |vec| black_box({ let _ = vec.pop(); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "pop"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 8>::new(); (0..4).for_each(|v| vec.push(v)); vec },
            |vec| black_box({ let _ = vec.pop(); }),
            BatchSize::SmallInput
        )
    );

    group.finish();
}

pub fn fronts(c: &mut Criterion) {

    let mut group = c.benchmark_group("Front Ops");
    group.sample_size(500);

    for len in [4usize, 64, 1024] {
        group.bench_function(
            BenchmarkId::new("DynamicArray-unshift", len),
            |b| b.iter_batched_ref(
                || { let mut array = DynamicArray::<u32>::new(); (0..len as u32).for_each(|v| array.push(v)); array },
                |array| black_box({ array.unshift(black_box(7)); }),
                BatchSize::SmallInput
            )
        );
        group.bench_function(
            BenchmarkId::new("VecDeque-push_front", len),
            |b| b.iter_batched_ref(
                || (0..len as u32).collect::<VecDeque<u32>>(),
                |deque| black_box({ deque.push_front(black_box(7)); }),
                BatchSize::SmallInput
            )
        );
        group.bench_function(
            BenchmarkId::new("DynamicArray-shift", len),
            |b| b.iter_batched_ref(
                || { let mut array = DynamicArray::<u32>::new(); (0..len as u32).for_each(|v| array.push(v)); array },
                |array| black_box({ let _ = array.shift(); }),
                BatchSize::SmallInput
            )
        );
        group.bench_function(
            BenchmarkId::new("Vec-remove0", len),
            |b| b.iter_batched_ref(
                || (0..len as u32).collect::<Vec<u32>>(),
                |vec| black_box({ let _ = vec.remove(0); }),
                BatchSize::SmallInput
            )
        );
    }

    group.bench_function(
        "get",
        |b| b.iter_batched_ref(
            || DynamicArray::<u32>::from(black_box([32; 8])),
            |array| black_box(for i in 0..array.len() { let _ = black_box(array.get(i)); }),
            BatchSize::SmallInput
        )
    );

    group.finish();
}

criterion_group!(benches, ends, fronts);
criterion_main!(benches);
