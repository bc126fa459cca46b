#![no_main]

use bitstream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of reads.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 6;
        idx += 1;

        let result = match op {
            0 => reader.read_u8().map(drop),
            1 => reader.read_u32_be().map(drop),
            2 => reader.read_i64_be().map(drop),
            3 => reader.read_f64_be().map(drop),
            4 => reader.read_bytes(usize::from(data[idx - 1] % 16)).map(drop),
            _ => reader.read_len_prefixed().map(drop),
        };
        if result.is_err() {
            break;
        }
    }
});
