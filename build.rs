// build.rs

//! Locate the KaHyPar shared library for the native engine.
//!
//! This script supports two discovery modes:
//!  • Default (pkg-config):  use `pkg_config::probe("kahypar")`
//!  • Manual    (env-vars):  `KAHYPAR_NO_PKG_CONFIG=1` plus `KAHYPAR_DIR` or
//!                           `KAHYPAR_LIB_DIR`.
//!
//! The C API of `libkahypar.h` is small and stable, so the declarations live
//! in `src/partitioning/kahypar.rs` instead of being generated here.

#[cfg(feature = "kahypar-support")]
fn main() {
    use std::env;

    if env::var_os("KAHYPAR_NO_PKG_CONFIG").is_some() {
        // -------- Manual ----------
        let lib = match env::var("KAHYPAR_LIB_DIR") {
            Ok(dir) => dir,
            Err(_) => {
                let prefix = env::var("KAHYPAR_DIR")
                    .expect("KAHYPAR_DIR or KAHYPAR_LIB_DIR must be set when KAHYPAR_NO_PKG_CONFIG=1");
                format!("{}/lib", prefix)
            }
        };

        println!("cargo:rustc-link-search=native={}", lib);
        println!("cargo:rustc-link-lib=dylib=kahypar");
    } else {
        // -------- pkg-config ----------
        // pkg-config prints the link-search and link-lib lines itself.
        pkg_config::Config::new()
            .statik(false)
            .probe("kahypar")
            .expect("Could not find KaHyPar via pkg-config; set KAHYPAR_NO_PKG_CONFIG=1 to bypass");
    }

    println!("cargo:rerun-if-env-changed=KAHYPAR_NO_PKG_CONFIG");
    println!("cargo:rerun-if-env-changed=KAHYPAR_DIR");
    println!("cargo:rerun-if-env-changed=KAHYPAR_LIB_DIR");
}

#[cfg(not(feature = "kahypar-support"))]
fn main() {
    // No-op when the `kahypar-support` feature is disabled
}
