//! Build-environment facts behind `Created-By`, `Built-By`, `Build-Jdk`,
//! `Build-Jdk-Spec` and `Build-Os`.
//!
//! Values are plain data so resolution never reads process state directly;
//! [`BuildEnvironment::detect`] is the only place that does.
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildEnvironment {
    pub runtime_version: Option<String>,
    pub runtime_vendor: Option<String>,
    pub spec_version: Option<String>,
    pub user_name: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub os_arch: Option<String>,
}

impl BuildEnvironment {
    /// Probes `$JAVA_HOME/release`, the user name variables and the host OS.
    pub fn detect() -> Self {
        let mut env = Self::default();

        if let Some(java_home) = std::env::var_os("JAVA_HOME") {
            let release = Path::new(&java_home).join("release");
            match fs::read_to_string(&release) {
                Ok(content) => env.apply_release(&content),
                Err(e) => debug!(path = %release.display(), error = %e, "no JDK release file"),
            }
        }

        env.user_name = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok();
        env.os_name = Some(jdk_os_name(std::env::consts::OS).to_string());
        env.os_arch = Some(jdk_os_arch(std::env::consts::ARCH).to_string());
        env.os_version = host_os_version();
        env
    }

    fn apply_release(&mut self, content: &str) {
        let release = parse_release(content);
        if let Some(version) = release.get("JAVA_VERSION") {
            self.spec_version = Some(specification_version(version));
            self.runtime_version = Some(version.clone());
        }
        if let Some(vendor) = release.get("IMPLEMENTOR") {
            self.runtime_vendor = Some(vendor.clone());
        }
    }

    /// Fields set in `overrides` replace the detected ones.
    pub fn with_overrides(mut self, overrides: &BuildEnvironment) -> Self {
        fn set(field: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                field.clone_from(value);
            }
        }
        set(&mut self.runtime_version, &overrides.runtime_version);
        set(&mut self.runtime_vendor, &overrides.runtime_vendor);
        set(&mut self.spec_version, &overrides.spec_version);
        set(&mut self.user_name, &overrides.user_name);
        set(&mut self.os_name, &overrides.os_name);
        set(&mut self.os_version, &overrides.os_version);
        set(&mut self.os_arch, &overrides.os_arch);
        self
    }

    /// `"<version> (<vendor>)"`
    pub fn runtime(&self) -> Option<String> {
        Some(format!(
            "{} ({})",
            self.runtime_version.as_ref()?,
            self.runtime_vendor.as_ref()?
        ))
    }

    /// `"<name> (<version>; <arch>)"`
    pub fn operating_system(&self) -> Option<String> {
        Some(format!(
            "{} ({}; {})",
            self.os_name.as_ref()?,
            self.os_version.as_ref()?,
            self.os_arch.as_ref()?
        ))
    }
}

/// Parses the `KEY="value"` lines of a JDK `release` file.
pub fn parse_release(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

/// `1.8.0_292` -> `1.8`, `17.0.2` -> `17`, `21+35` -> `21`.
pub fn specification_version(version: &str) -> String {
    let mut parts = version.split(|c: char| !c.is_ascii_digit());
    match (parts.next(), parts.next()) {
        (Some("1"), Some(minor)) if !minor.is_empty() => format!("1.{minor}"),
        (Some(major), _) if !major.is_empty() => major.to_string(),
        _ => version.to_string(),
    }
}

fn jdk_os_name(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "Mac OS X",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "solaris" => "SunOS",
        other => other,
    }
}

fn jdk_os_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "powerpc64" => "ppc64",
        other => other,
    }
}

fn host_os_version() -> Option<String> {
    if !cfg!(target_os = "linux") {
        return None;
    }
    fs::read_to_string("/proc/sys/kernel/osrelease")
        .ok()
        .map(|s| s.trim().to_string())
}
