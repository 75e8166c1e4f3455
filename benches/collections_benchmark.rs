use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis::{BinarySearchTree, LinkedList, Queue, Stack};

fn bench_linked_list(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("linked_list_append_drain", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..size {
                list.append(i);
            }
            while list.delete_head().is_some() {}
            black_box(list.len())
        });
    });

    c.bench_function("linked_list_prepend", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..size {
                list.prepend(i);
            }
            black_box(list.len())
        });
    });
}

fn bench_queue_and_stack(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..size {
                queue.enqueue(i);
            }
            while queue.dequeue().is_some() {}
            black_box(queue.len())
        });
    });

    c.bench_function("stack_push_pop", |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for i in 0..size {
                stack.push(i);
            }
            while stack.pop().is_some() {}
            black_box(stack.len())
        });
    });
}

fn bench_bst(c: &mut Criterion) {
    let size = 1000u32;

    c.bench_function("bst_insert_in_order", |b| {
        b.iter(|| {
            let mut tree = BinarySearchTree::new();
            // Pseudo-random insertion order keeps the tree from degenerating.
            let mut value = 1u32;
            for _ in 0..size {
                value = value.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                tree.insert(value % 10_000);
            }
            black_box(tree.in_order().count())
        });
    });
}

criterion_group!(benches, bench_linked_list, bench_queue_and_stack, bench_bst);
criterion_main!(benches);
