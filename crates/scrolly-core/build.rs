// File: crates/scrolly-core/build.rs
// Summary: Links the Windows system libraries Skia's raster backend pulls in.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, referenced by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
