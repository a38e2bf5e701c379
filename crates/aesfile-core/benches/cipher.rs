use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aesfile_core::{encrypt, encrypt_block, KeySchedule, KeySize, State};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_128", |b| {
        b.iter(|| KeySchedule::expand(&[0u8; 16], KeySize::Aes128).unwrap());
    });
    group.bench_function("expand_256", |b| {
        b.iter(|| KeySchedule::expand(&[0u8; 32], KeySize::Aes256).unwrap());
    });
    group.finish();
}

fn bench_cipher(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let schedule = KeySchedule::expand(&key, KeySize::Aes128).unwrap();

    let mut group = c.benchmark_group("cipher");
    group.sample_size(20);
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let state = State::from_bytes(&block);
        b.iter(|| encrypt_block(state, &schedule));
    });
    group.bench_function("encrypt_4k_stream", |b| {
        let mut data = vec![0u8; 4096];
        rng.fill_bytes(&mut data);
        b.iter(|| encrypt(&key, KeySize::Aes128, &data).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_cipher);
criterion_main!(benches);
