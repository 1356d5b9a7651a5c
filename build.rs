//! Build script to generate the embedded word catalog
//!
//! Reads the tab-separated catalog file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/words.tsv",
        &Path::new(&out_dir).join("catalog.rs"),
        "CATALOG",
        "Built-in (word, hint) catalog",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/words.tsv");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split_once('\t').unwrap_or((line, "")))
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} entries)").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, hint) in entries {
        writeln!(output, "    ({:?}, {:?}),", word.trim(), hint.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
