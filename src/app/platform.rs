//! Platform probes for the ambient display preference.

/// Whether the user's platform prefers dark presentation. Consulted only
/// when no persisted theme exists; any probe failure means "prefers light".
pub fn prefers_dark_mode() -> bool {
    probe().unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn probe() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let value: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn probe() -> Option<bool> {
    use std::process::Command;

    // GNOME and derivatives expose the preference through gsettings; the
    // color-scheme key covers newer desktops, gtk-theme the older ones.
    for (key, needle) in [
        ("color-scheme", "prefer-dark"),
        ("gtk-theme", "dark"),
    ] {
        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", key])
            .output()
        {
            let value = String::from_utf8_lossy(&output.stdout).to_lowercase();
            if value.contains(needle) {
                return Some(true);
            }
        }
    }
    None
}

#[cfg(target_os = "macos")]
fn probe() -> Option<bool> {
    use std::process::Command;

    // The key only exists while dark mode is on.
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        return Some(false);
    }
    Some(String::from_utf8_lossy(&output.stdout).to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn probe() -> Option<bool> {
    None
}
