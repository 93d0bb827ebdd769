//! Build script for the web crate.
//!
//! Generates a content hash for the stylesheet so templates can emit
//! cache-busting asset URLs.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_css();
}

/// Hash main.css and expose the result as the `CSS_HASH` environment
/// variable for use with `env!("CSS_HASH")`.
fn hash_css() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    // Tell Cargo to rerun if main.css changes
    println!("cargo:rerun-if-changed={}", css_path.display());

    // CSS might not exist yet during initial build
    let Ok(content) = fs::read(&css_path) else {
        println!("cargo:rustc-env=CSS_HASH=dev");
        return;
    };

    // First 8 hex chars of SHA256 are plenty for cache busting
    let hash = format!("{:x}", Sha256::digest(&content));
    let short_hash = hash.get(..8).unwrap_or("dev");
    println!("cargo:rustc-env=CSS_HASH={short_hash}");
}
