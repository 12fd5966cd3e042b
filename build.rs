fn main() {
    // Capture the build year for the footer copyright
    let build_year = chrono::Utc::now().format("%Y").to_string();

    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
