use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_code::ecc::hamming::{decode, encode, HammingCode};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_bits(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(0..=1)).collect()
}

fn bench_bit_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hamming Bits");
    for k in [4, 26, 120, 247] {
        let data = random_bits(k);
        let mut codeword = encode(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", k), &data, |b, data| {
            b.iter(|| encode(black_box(data)))
        });

        codeword[k / 2] ^= 1;
        group.bench_with_input(BenchmarkId::new("decode", k), &codeword, |b, codeword| {
            b.iter(|| decode(black_box(codeword)))
        });
    }
    group.finish();
}

fn bench_block_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hamming Blocks");
    let mut rng = StdRng::seed_from_u64(7);
    let data: Vec<u8> = (0..64 * 1024).map(|_| rng.gen()).collect();

    for code in [
        HammingCode::standard_7_4(),
        HammingCode::hamming_15_11(),
        HammingCode::new(57).unwrap(),
    ] {
        let encoded = code.encode(&data);
        group.bench_with_input(
            BenchmarkId::new("encode", code.to_string()),
            &data,
            |b, data| b.iter(|| code.encode(black_box(data))),
        );
        group.bench_with_input(
            BenchmarkId::new("decode", code.to_string()),
            &encoded,
            |b, encoded| b.iter(|| code.decode_exact(black_box(encoded), data.len())),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_bit_codec, bench_block_codec);
criterion_main!(benches);
