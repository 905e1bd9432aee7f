#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_profile::Author;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Should never panic, only return Ok or Err
        let _ = Author::parse_search_result(s);
        let _ = scholar_profile::models::parse_search_page(s);
    }
});
