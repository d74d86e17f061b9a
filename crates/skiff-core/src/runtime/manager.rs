//! Package manager detection

use std::fmt;
use std::process::Command;

/// Package managers the scaffolder knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    Npm,
}

impl PackageManager {
    /// Probe order for detection. npm is deliberately absent: it is the
    /// fallback, assumed present whenever nothing else is.
    pub const CANDIDATES: [PackageManager; 3] = [
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    /// Selected when every candidate probe fails
    pub const FALLBACK: PackageManager = PackageManager::Npm;

    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "Yarn",
            PackageManager::Bun => "Bun",
            PackageManager::Npm => "npm",
        }
    }

    /// Arguments for the install subcommand
    pub fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Probe the host for the highest-priority available package manager.
/// Probing stops at the first success; npm is returned when every probe
/// fails.
pub fn detect() -> PackageManager {
    detect_with(probe)
}

/// Detection with an injected probe, so tests can fake host state
pub fn detect_with(probe: impl Fn(PackageManager) -> bool) -> PackageManager {
    for candidate in PackageManager::CANDIDATES {
        if probe(candidate) {
            return candidate;
        }
    }
    PackageManager::FALLBACK
}

/// A candidate is available when its version check exits successfully
fn probe(manager: PackageManager) -> bool {
    Command::new(manager.command())
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_probes_failing_selects_fallback() {
        assert_eq!(detect_with(|_| false), PackageManager::Npm);
    }

    #[test]
    fn test_highest_priority_candidate_wins() {
        assert_eq!(detect_with(|_| true), PackageManager::Pnpm);
    }

    #[test]
    fn test_lower_priority_candidate_selected_when_others_fail() {
        let only_bun = |manager: PackageManager| manager == PackageManager::Bun;
        assert_eq!(detect_with(only_bun), PackageManager::Bun);

        let only_yarn = |manager: PackageManager| manager == PackageManager::Yarn;
        assert_eq!(detect_with(only_yarn), PackageManager::Yarn);
    }

    #[test]
    fn test_fallback_is_not_probed() {
        detect_with(|manager| {
            assert_ne!(manager, PackageManager::Npm);
            false
        });
    }
}
