use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=SUMVEC_LIB_DIR");

    if env::var_os("CARGO_FEATURE_EXTERNAL").is_none() {
        return;
    }

    // Link the foreign SumVec when we know where it lives; otherwise leave
    // the symbol for the host process to provide at load time.
    if let Some(dir) = env::var_os("SUMVEC_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
        println!("cargo:rustc-link-lib=dylib=sumvec");
    }
}
