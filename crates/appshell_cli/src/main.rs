//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `appshell_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use appshell_core::{NotificationCenter, Platform, SettingsStore};

fn main() {
    println!("appshell_core version={}", appshell_core::core_version());

    let platform = Platform::detached();

    let settings = SettingsStore::new(&platform);
    match serde_json::to_string(settings.current().as_ref()) {
        Ok(raw) => println!("appshell_core default_settings={raw}"),
        Err(err) => println!("appshell_core default_settings error={err}"),
    }

    let center = NotificationCenter::new(&platform);
    println!("appshell_core notifications_empty={}", center.is_empty());
}
