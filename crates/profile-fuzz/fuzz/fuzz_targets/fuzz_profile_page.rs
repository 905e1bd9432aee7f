#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_profile::Author;
use scholar_profile::extract::{ProfileDocument, SelectorTable};
use scholar_profile::profile::{harvest_page, parse_basics, parse_coauthors, parse_counts, parse_indices};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let document = ProfileDocument::parse(s);
        let selectors = SelectorTable::CURRENT;
        let mut author = Author::new("fuzz");

        // Each section parser must fail cleanly on arbitrary markup
        let _ = parse_basics(&document, &selectors, &mut author);
        let _ = parse_indices(&document, &selectors, &mut author);
        let _ = parse_counts(&document, &selectors, &mut author);
        let _ = parse_coauthors(&document, &selectors, &mut author);
        let _ = harvest_page(&document, &selectors);
    }
});
