use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=PIKATTS_LIB_DIR");

    // Only emit link directives when the `pico` feature asks for the real
    // native library. Default builds (and the mock-backed test suite) must
    // not require libpikatts on the build machine.
    if env::var_os("CARGO_FEATURE_PICO").is_none() {
        return;
    }

    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set; run through Cargo");
    let vendor_lib = PathBuf::from(&manifest_dir).join("vendor/pikatts/lib");

    if let Some(dir) = env::var_os("PIKATTS_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", PathBuf::from(dir).display());
    } else if vendor_lib.join("libpikatts.so").exists() {
        println!("cargo:rustc-link-search=native={}", vendor_lib.display());
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", vendor_lib.display());
    } else {
        // Fall back to common system locations.
        for loc in ["/usr/local/lib", "/usr/lib64", "/usr/lib"] {
            if PathBuf::from(loc).join("libpikatts.so").exists() {
                println!("cargo:rustc-link-search=native={}", loc);
                break;
            }
        }
    }

    println!("cargo:rustc-link-lib=pikatts");
    println!("cargo:rerun-if-changed={}", vendor_lib.display());
}
