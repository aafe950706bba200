// Host-side tests for the gallery fixture.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod catalog {
    include!("../src/core/catalog.rs");
}

use catalog::*;
use std::collections::HashSet;

#[test]
fn fixture_has_six_unique_pieces() {
    assert_eq!(SAMPLE_ART.len(), 6);
    let ids: HashSet<&str> = SAMPLE_ART.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), SAMPLE_ART.len());
    for a in SAMPLE_ART.iter() {
        assert!(!a.title.is_empty());
        assert!(a.image_url.starts_with("https://"));
        assert!((2000..=2100).contains(&a.year));
    }
}

#[test]
fn find_returns_index_and_piece() {
    let (index, piece) = find("4").expect("piece 4");
    assert_eq!(index, 3);
    assert_eq!(piece.title, "Nebula V");
    assert!(find("missing").is_none());
}
