//! Build script to generate the embedded algorithm catalog
//!
//! Reads the JSON catalog and generates Rust source code with a const array,
//! keeping the key order of the file.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/algorithms.json",
        &Path::new(&out_dir).join("algorithms.rs"),
        "ALGORITHMS",
        "Built-in algorithm catalog (name, algorithm) in file order",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/algorithms.json");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("{input_path} is not a JSON object: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated algorithm catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (name, value) in &parsed {
        let algorithm = value
            .as_str()
            .unwrap_or_else(|| panic!("Catalog entry '{name}' is not a string"));
        writeln!(output, "    ({name:?}, {:?}),", algorithm.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", parsed.len()).unwrap();
}
