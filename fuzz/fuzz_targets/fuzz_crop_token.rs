#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpos::index::Alphabet;
use wordpos::utils::crop_token;

fuzz_target!(|data: &str| {
    // Cropping arbitrary tokens must not panic, and any produced key must
    // respect the length bound in characters.
    for alphabet in [Alphabet::Unicode, Alphabet::Ascii] {
        if let Some(key) = crop_token(data, alphabet, 5) {
            assert!(!key.is_empty());
            assert!(key.chars().count() <= 5);
            assert!(key.chars().all(|ch| alphabet.contains(ch)));
        }
    }
});
