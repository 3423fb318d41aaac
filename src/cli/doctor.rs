//! Environment readiness check.

use std::path::Path;

use anyhow::Result;

use crate::config::CHROME_ENV;
use crate::render::find_chrome;

/// Check Chrome availability and export-directory writability.
pub async fn run() -> Result<()> {
    println!("ESG Scout Doctor");
    println!("================");
    println!();

    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    println!("OS:   {os}");
    println!("Arch: {arch}");
    println!();

    let chrome = find_chrome();
    match &chrome {
        Some(path) => println!("[OK] Chrome found: {}", path.display()),
        None => println!(
            "[!!] Chrome NOT found. Install Google Chrome or Chromium, or set {CHROME_ENV} to the binary path."
        ),
    }

    let writable = dir_writable(Path::new("."));
    if writable {
        println!("[OK] Current directory is writable (exports land here)");
    } else {
        println!("[!!] Current directory is not writable; exports will fail");
    }

    println!();
    if chrome.is_some() && writable {
        println!("Status: READY");
    } else {
        println!("Status: NOT READY");
        if chrome.is_none() {
            println!("  The gresb and sustainalytics commands need a local Chrome install.");
        }
    }

    Ok(())
}

/// Probe a directory by creating and removing a marker file.
fn dir_writable(dir: &Path) -> bool {
    let probe = dir.join(".esg-scout-doctor");
    match std::fs::File::create(&probe) {
        Ok(_) => {
            let _ = std::fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}
