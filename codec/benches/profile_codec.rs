//! Profile codec benchmarks.
//!
//! Measures payload encode/decode for a profile of typical size, the full
//! file path including compression, and the rewards text codec.

use codec::{
    decode_payload, decode_profile, decode_reward_words, encode_payload, encode_profile,
    encode_reward_words, CodecLimits, Entry, ProfileConfig, SettingValue,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn typical_entries() -> Vec<Entry> {
    (0..300u32)
        .map(|id| {
            let value = match id % 5 {
                0 => SettingValue::Int32(id as i32 * 7),
                1 => SettingValue::Float(id as f32 / 3.0),
                2 => SettingValue::Byte((id % 256) as u8),
                3 => SettingValue::String(format!("setting-{id}")),
                _ => SettingValue::Blob(vec![(id % 256) as u8; 24]),
            };
            Entry::new(id, value)
        })
        .collect()
}

fn bench_payload(c: &mut Criterion) {
    let entries = typical_entries();
    let (payload, _) = encode_payload(&entries).unwrap();
    let limits = CodecLimits::default();

    let mut group = c.benchmark_group("payload");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| encode_payload(black_box(&entries)).unwrap());
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode_payload(black_box(&payload), &limits).unwrap());
    });
    group.finish();
}

fn bench_file(c: &mut Criterion) {
    let entries = typical_entries();
    let config = ProfileConfig::default();
    let (file, _) = encode_profile(&entries, &config).unwrap();

    let mut group = c.benchmark_group("file");
    group.bench_function("encode", |b| {
        b.iter(|| encode_profile(black_box(&entries), &config).unwrap());
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode_profile(black_box(&file), &config).unwrap());
    });
    group.finish();
}

fn bench_rewards(c: &mut Criterion) {
    let values: Vec<i32> = (0..14).map(|i| i * 1_000_003).collect();
    let text = encode_reward_words(&values).unwrap();

    c.bench_function("rewards_encode", |b| {
        b.iter(|| encode_reward_words(black_box(&values)).unwrap());
    });
    c.bench_function("rewards_decode", |b| {
        b.iter(|| decode_reward_words(black_box(&text)).unwrap());
    });
}

criterion_group!(benches, bench_payload, bench_file, bench_rewards);
criterion_main!(benches);
