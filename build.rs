use chrono::Utc;
use std::env;
use std::fs::{metadata, File};
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("version.rs");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cargo_toml_path = Path::new(&manifest_dir).join("Cargo.toml");

    // Regenerate only when Cargo.toml is newer than the last generated file
    let should_regenerate = if dest_path.exists() {
        let version_rs_modified = metadata(&dest_path).unwrap().modified().unwrap();
        let cargo_toml_modified = metadata(&cargo_toml_path).unwrap().modified().unwrap();
        cargo_toml_modified > version_rs_modified
    } else {
        true
    };

    if !should_regenerate {
        return;
    }

    let mut f = File::create(&dest_path).unwrap();

    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let git_hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    #[allow(clippy::uninlined_format_args)]
    writeln!(
        &mut f,
        r###"pub const BUILD_TIME: &str = "{}";
pub const GIT_HASH: &str = "{}";"###,
        build_time, git_hash
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
