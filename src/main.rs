//! Typedrop binary entrypoint.
//!
//! Parses CLI arguments and dispatches to command handlers in the `typedrop`
//! crate. The binary is intentionally a thin wrapper: argument parsing and
//! dispatch happen here, while the real work (file reading, encoding,
//! template rendering, keystroke synthesis) is performed by the command
//! implementations found in `typedrop::commands`.
//!
//! Examples
//!
//! Turn a binary into a self-extracting PowerShell dropper:
//!
//! $ typedrop encode-dropper --in agent.exe --out agent.ps1 -b update.exe
//!
//! The command above will:
//! 1. Read `agent.exe` and deflate-compress it at the highest level.
//! 2. Base64-encode the compressed bytes.
//! 3. Write `agent.ps1`, a script that reconstructs the binary on the target
//!    as `$env:USERPROFILE\update.exe`.
//!
//! Convert that script into a timed keystroke-injection script:
//!
//! $ typedrop synthesize-keystrokes --in agent.ps1 --out agent.xte \
//!     --focus-delay 10 --rate 2.0
//!
//! Or run the whole chain in one invocation:
//!
//! $ typedrop drop --in agent.exe --out agent.xte
//!
//! Either synthesis form prints the estimated replay duration so the
//! operator knows the wall-clock cost before injecting anything.
//!
//! Notes
//! - The CLI is implemented with `clap` and dispatches to types implementing
//!   the `CommandHandler` trait.
//! - A failed run exits non-zero and writes no output artifact; artifacts are
//!   only written after the full transformation has succeeded in memory.
//!
//! See `typedrop::commands::base::Cli` for configuration options and
//! available subcommands.

use clap::Parser;

fn main() -> typedrop::error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments and execute the selected operation.
    typedrop::commands::base::Cli::parse().handle()
}
