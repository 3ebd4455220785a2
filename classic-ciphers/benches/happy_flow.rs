use classic_ciphers::caesar;
use classic_ciphers::hill::{HillCipher, HillKey};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_happy_flow(c: &mut Criterion) {
    let hill = HillCipher::default();
    let key = HillKey::new(3, 3, 2, 5);

    // the same message every iteration
    let original_data = "Heh safasdkjfhkjas fha sdf asda";

    c.bench_function("hill_happy_flow", |b| {
        b.iter(|| {
            let cipher = hill.encrypt(black_box(original_data), &key).expect("encrypt");
            let decoded = hill.decrypt(&cipher, &key).expect("decrypt");
            black_box(decoded);
        })
    });

    c.bench_function("caesar_happy_flow", |b| {
        b.iter(|| {
            let cipher = caesar::encrypt(black_box(original_data), 3).expect("encrypt");
            let decoded = caesar::decrypt(&cipher, 3).expect("decrypt");
            black_box(decoded);
        })
    });

    c.bench_function("hill_key_inverse", |b| {
        b.iter(|| black_box(key).inverse().expect("invertible"))
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
