// Does the receiver qualifier change what a method costs at runtime?
// Both variants run the identical loop; only `&self` vs `&mut self` differs.

use std::hint::black_box;

use ownership_demos::timing::{measure, Workload};

const BATCH: u32 = 100;

fn main() {
    let mut data = Workload::default();

    let by_ref = measure(BATCH, || {
        black_box(black_box(&data).sum_by_ref());
    });

    let by_mut = measure(BATCH, || {
        black_box(black_box(&mut data).sum_by_mut());
    });

    println!(
        "&self method duration:     {:.3} ms",
        by_ref.as_secs_f64() * 1_000.0
    );
    println!(
        "&mut self method duration: {:.3} ms",
        by_mut.as_secs_f64() * 1_000.0
    );
}
