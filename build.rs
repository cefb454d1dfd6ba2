//! Build script that embeds the local puzzle word list
//!
//! `data/words.txt` holds one word per line; blank lines and `#` comments are
//! skipped. Words are uppercased and deduplicated in file order.

use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const SOURCE: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");

    let content =
        fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("Failed to read {SOURCE}: {e}"));
    let words = parse_words(&content);

    // The fallback chain ends by taking the first local word
    assert!(!words.is_empty(), "{SOURCE} must contain at least one word");

    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("words.rs");
    fs::write(&out_path, render(&words))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", out_path.display()));
}

fn parse_words(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            assert!(
                line.chars().all(|c| c.is_ascii_alphabetic()),
                "{SOURCE}: '{line}' is not a plain word"
            );
            line.to_ascii_uppercase()
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

fn render(words: &[String]) -> String {
    let mut src = String::from("// Generated from data/words.txt by build.rs\n\n");

    src.push_str("/// Local puzzle words: fallback for word choice and fast path for validity\n");
    src.push_str("pub const WORDS: &[&str] = &[\n");
    for word in words {
        writeln!(src, "    {word:?},").unwrap();
    }
    src.push_str("];\n\n");

    src.push_str("/// Number of entries in [`WORDS`]\n");
    writeln!(src, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    src
}
