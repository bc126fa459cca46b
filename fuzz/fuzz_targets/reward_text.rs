#![no_main]

use codec::{decode_reward_words, RewardPoints};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(words) = decode_reward_words(text) {
        assert!(words.len() >= 14);
    }
    // Negative totals are written as zero, so only non-negative ones survive.
    if let Ok(points) = RewardPoints::from_text(text) {
        if points.as_array().iter().any(|&p| p < 0) {
            return;
        }
        let text = points.to_text().expect("points encode");
        assert_eq!(RewardPoints::from_text(&text).ok(), Some(points));
    }
});
