// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hmac_siv::{AssociatedData, Concat, KEY_SIZE, S2v, Siv, TAG_SIZE, TagSynthesizer};

const PLAINTEXT_SIZES: [usize; 7] = [0, 16, 32, 64, 1024, 16384, 65536];

const ASSOCIATED_DATA_SIZES: [usize; 3] = [0, 64, 1536];

fn bench_encrypt<S: TagSynthesizer>(c: &mut Criterion) {
    let key = [0x42u8; KEY_SIZE];
    let mut group = c.benchmark_group(format!("siv_encrypt_{}", S::NAME.to_lowercase()));

    for ad_size in ASSOCIATED_DATA_SIZES {
        let field = vec![0xA5u8; ad_size];
        let fields = [field.as_slice()];

        for size in PLAINTEXT_SIZES {
            group.throughput(Throughput::Bytes((size + ad_size) as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("ad {} bytes", ad_size), format!("{} bytes", size)),
                &size,
                |b, &size| {
                    let plaintext = vec![0u8; size];
                    let mut ciphertext = vec![0u8; size + TAG_SIZE];

                    b.iter(|| {
                        Siv::<S>::encrypt(
                            black_box(&mut ciphertext),
                            black_box(&plaintext),
                            black_box(&key),
                            AssociatedData::new(black_box(&fields)),
                        )
                        .expect("encrypt failed");
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_decrypt<S: TagSynthesizer>(c: &mut Criterion) {
    let key = [0x42u8; KEY_SIZE];
    let mut group = c.benchmark_group(format!("siv_decrypt_{}", S::NAME.to_lowercase()));

    for ad_size in ASSOCIATED_DATA_SIZES {
        let field = vec![0xA5u8; ad_size];
        let fields = [field.as_slice()];

        for size in PLAINTEXT_SIZES {
            group.throughput(Throughput::Bytes((size + ad_size) as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("ad {} bytes", ad_size), format!("{} bytes", size)),
                &size,
                |b, &size| {
                    let ciphertext = Siv::<S>::encrypt_to_vec(&vec![0u8; size], &key, &fields)
                        .expect("initial encrypt failed");
                    let mut plaintext = vec![0u8; size];

                    b.iter(|| {
                        Siv::<S>::decrypt(
                            black_box(&mut plaintext),
                            black_box(&ciphertext),
                            black_box(&key),
                            AssociatedData::new(black_box(&fields)),
                        )
                        .expect("decrypt failed");
                    });
                },
            );
        }
    }
    group.finish();
}

fn benchmark_siv_encrypt(c: &mut Criterion) {
    bench_encrypt::<S2v>(c);
    bench_encrypt::<Concat>(c);
}

fn benchmark_siv_decrypt(c: &mut Criterion) {
    bench_decrypt::<S2v>(c);
    bench_decrypt::<Concat>(c);
}

criterion_group!(benches, benchmark_siv_encrypt, benchmark_siv_decrypt);
criterion_main!(benches);
