#![no_main]

use codec::{decode_payload, decode_profile, encode_payload, CodecLimits, ProfileConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = CodecLimits::for_testing();
    let config = ProfileConfig::for_testing();

    let _ = decode_profile(data, &config);

    // Raw payloads that decode must re-encode to something that decodes to
    // the same entries.
    if let Ok(decoded) = decode_payload(data, &limits) {
        if let Ok((bytes, _)) = encode_payload(&decoded.entries) {
            let again = decode_payload(&bytes, &limits).expect("re-encoded payload decodes");
            assert_eq!(again.entries.len(), decoded.entries.len());
        }
    }
});
