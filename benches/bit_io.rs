use bits::{bit_writer::BitWriter, order::BitOrder};
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_writer(value_count: usize, order: BitOrder) -> BitWriter {
    let mut writer = BitWriter::with_order(order);

    // Deterministic but non-trivial pattern
    for i in 0..value_count {
        writer.write_i32((i as i32).wrapping_mul(-7919));
    }

    writer
}

fn bench_write(c: &mut Criterion) {
    for &value_count in &[1usize, 10, 100, 1000] {
        c.bench_function(&format!("write_{}_i32", value_count), |b| {
            b.iter(|| gen_writer(value_count, BitOrder::LsbFirst))
        });
    }
}

fn bench_read(c: &mut Criterion) {
    for order in [BitOrder::LsbFirst, BitOrder::MsbFirst] {
        let writer = gen_writer(1000, order);

        c.bench_function(&format!("read_1000_i32_{:?}", order), |b| {
            b.iter(|| {
                let mut reader = writer.to_reader();
                while reader.has_unread_bits() {
                    let _ = reader.read_i32().unwrap();
                }
            })
        });
    }
}

criterion_group!(benches, bench_write, bench_read);
criterion_main!(benches);
