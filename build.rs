use std::fs;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo: toml::Value = cargo_toml.parse().expect("Failed to parse Cargo.toml");

    let api_version = cargo
        .get("package")
        .and_then(|pkg| pkg.get("metadata"))
        .and_then(|meta| meta.get("stripe"))
        .and_then(|stripe| stripe.get("api_version"))
        .and_then(|v| v.as_str())
        .expect("Cargo.toml is missing [package.metadata.stripe] api_version");

    println!("cargo:rustc-env=STRIPE_API_VERSION={}", api_version);
}
