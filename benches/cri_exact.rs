use criterion::{criterion_group, criterion_main, Criterion};
use strum::IntoEnumIterator;

use dromedary::camel::Camel;
use dromedary::exact::analyse_exact;
use dromedary::probs::SliceExt;
use dromedary::pyramid::Pyramid;
use dromedary::track::Track;

fn criterion_benchmark(c: &mut Criterion) {
    let track = Track::default()
        .with_stack(0, &[Camel::Red, Camel::Blue])
        .unwrap()
        .with_stack(1, &[Camel::Green])
        .unwrap()
        .with_stack(2, &[Camel::Yellow, Camel::Purple])
        .unwrap();

    // sanity check
    let table = analyse_exact(&track, &Pyramid::full()).unwrap();
    assert!((table.first_probs()[..].sum() - 1.0).abs() < 1e-9);

    fn bench(c: &mut Criterion, track: &Track, dice: usize) {
        let pyramid = Camel::iter().take(dice).collect::<Pyramid>();
        c.bench_function(&format!("cri_exact_{dice}_dice"), |b| {
            b.iter(|| analyse_exact(track, &pyramid).unwrap());
        });
    }
    bench(c, &track, 3);
    bench(c, &track, 4);
    bench(c, &track, 5);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
