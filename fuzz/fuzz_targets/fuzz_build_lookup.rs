#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use wordpos::index::build::build_from_reader;
use wordpos::index::IndexConfig;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes: first half is the source, second half the queries.
    // Neither loading nor lookup may panic, and lookups must be idempotent.
    let mid = data.len() / 2;
    let (source, queries) = data.split_at(mid);

    let config = IndexConfig::default();
    let index = match build_from_reader(Cursor::new(source), &config) {
        Ok(index) => index,
        Err(_) => return,
    };

    let queries = String::from_utf8_lossy(queries);
    for token in queries.split_whitespace() {
        let first = index.lookup(token);
        assert_eq!(index.lookup(token), first);
    }
});
