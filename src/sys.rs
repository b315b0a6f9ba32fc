//! Host platform identification.
//!
//! Release assets for prebuilt binaries are usually named with Go-style
//! platform identifiers (`linux`, `darwin`, `amd64`, `arm64`). The functions
//! here translate the compile-time target into those names so the registry's
//! collaborators can match assets against the running host.

/// Alias reported next to `amd64`, used by sources that follow `uname -m`.
pub const LEGACY_AMD64_ALIAS: &str = "x86_64";

/// Normalized architecture identifiers for the running host.
///
/// On 64-bit x86 this is `["amd64", "x86_64"]`, otherwise a single entry.
pub fn current_architectures() -> Vec<String> {
    architectures_for(std::env::consts::ARCH)
}

/// Normalized OS identifier for the running host, as a one-element list.
pub fn current_os() -> Vec<String> {
    vec![normalize_os(std::env::consts::OS).to_string()]
}

/// Architecture identifiers for a Rust target architecture name.
pub fn architectures_for(arch: &str) -> Vec<String> {
    let primary = normalize_arch(arch);
    let mut archs = vec![primary.to_string()];
    if primary == "amd64" {
        archs.push(LEGACY_AMD64_ALIAS.to_string());
    }
    archs
}

/// Map a Rust `target_arch` name onto its Go-style counterpart.
///
/// Unknown names pass through unchanged.
pub fn normalize_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        other => other,
    }
}

/// Map a Rust `target_os` name onto its Go-style counterpart.
pub fn normalize_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}
