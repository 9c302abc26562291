use std::process::Command;

use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;

fn main() {
    match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
        Ok(x) => {
            let git_hash = String::from_utf8_lossy(&x.stdout);
            let git_hash = if git_hash.trim().is_empty() { "unknown" } else { git_hash.trim() };
            println!("cargo:rustc-env=GIT_HASH={}", git_hash);
        }
        Err(e) => {
            println!("cargo:warning=git rev-parse failed: {:?}", e);
            println!("cargo:rustc-env=GIT_HASH=unknown");
        }
    }

    let build_date = match OffsetDateTime::now_utc().format(&Rfc2822) {
        Ok(x) => x,
        Err(_) => String::from("unknown"),
    };
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}
