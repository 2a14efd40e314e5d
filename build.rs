fn main() {
    // Expose the build timestamp to the binary (`sprinklerkit --help` banner).
    let build_date = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}
