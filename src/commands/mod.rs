//! CLI command definitions and pipeline subcommand modules.
//!
//! This module groups the command-line argument parsing and the per-stage
//! subcommands used by the `typedrop` binary. Each stage (dropper generation,
//! keystroke synthesis, the fused drop pipeline) implements its own submodule
//! whose argument struct implements `CommandHandler`.
pub mod base;
pub mod deploy;
pub mod dropper;
pub mod keystrokes;

/// Expands a leading tilde in a user-supplied path.
///
/// Applied to every `--in`/`--out` argument at the CLI boundary so handlers
/// and the library transforms only ever see concrete paths.
pub(crate) fn expand_path(path: &std::path::Path) -> std::path::PathBuf {
    std::path::PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::expand_path;
    use std::path::Path;

    #[test]
    fn plain_paths_pass_through_unchanged() {
        assert_eq!(
            expand_path(Path::new("/tmp/agent.exe")),
            Path::new("/tmp/agent.exe")
        );
        assert_eq!(
            expand_path(Path::new("relative/agent.exe")),
            Path::new("relative/agent.exe")
        );
    }

    #[test]
    fn leading_tilde_expands_to_the_home_directory() {
        std::env::set_var("HOME", "/home/operator");

        assert_eq!(
            expand_path(Path::new("~/payloads/agent.exe")),
            Path::new("/home/operator/payloads/agent.exe")
        );
    }
}
