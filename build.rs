use chrono::{SecondsFormat, Utc};

fn main() {
    // shown in the footer; rendered identically by the server and the WASM bundle
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    println!("cargo:rerun-if-changed=build.rs");
}
