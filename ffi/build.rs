use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    // Only touch the source tree when the host asks for the header explicitly.
    let header_dir = env::var_os("BASIC_GET_HEADER_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env::var("OUT_DIR").unwrap()));
    let out = header_dir.join("basic_get.h");

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/types.rs");
    println!("cargo:rerun-if-env-changed=BASIC_GET_HEADER_DIR");

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("BASIC_GET_H")
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(out);
        }
        // Header generation is a convenience for C hosts; the library still builds.
        Err(e) => println!("cargo:warning=cbindgen failed: {e}"),
    }
}
