use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Rerun on any source change so the build id tracks the binary.
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Dev marker so the startup log shows whether the running server is the
    // newest binary.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ROSTER_BUILD_ID={}", build_id);
}
