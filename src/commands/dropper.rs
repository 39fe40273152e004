/*!
Dropper-generation subcommand for the typedrop CLI.

Reads a binary payload, compresses and base64-encodes it, and renders the
self-extracting PowerShell script that reconstructs the payload on the target.
The command implements `CommandHandler` and performs its work when `handle()`
is invoked by the top-level CLI dispatch.
*/

use clap::Args;
use std::path::{Path, PathBuf};

use crate::CommandHandler;

/// Derives the on-target filename from the input path when the caller did not
/// supply one explicitly.
///
/// # Errors
/// Returns a validation error if the path has no filename component.
pub(super) fn default_bin_name(input: &Path) -> crate::error::Result<String> {
    input
        .file_name()
        .map(|file_name| file_name.to_string_lossy().to_string())
        .ok_or_else(|| {
            crate::error::TypedropError::validation_error(
                "input path has no file name to derive the target filename from",
            )
        })
}

/// Runs the binary -> dropper transformation in memory.
///
/// Shared between the `encode-dropper` subcommand and the fused `drop`
/// pipeline: reads the payload, compresses and encodes it, and renders the
/// dropper template with the resolved target filename.
pub(super) fn build_dropper(
    input: &PathBuf,
    bin_name: Option<String>,
) -> crate::error::Result<String> {
    let bin_name = match bin_name {
        Some(name) => name,
        None => default_bin_name(input)?,
    };

    log::info!("Reading payload {}", input.to_string_lossy());
    let payload = crate::encoder::buffered_read_file(input)?;

    log::info!("Compressing and encoding {} payload bytes", payload.len());
    let encoded = crate::encoder::compress_and_encode(&payload)?;

    log::info!("Rendering dropper for target filename {:?}", bin_name);
    crate::dropper::generate(&encoded, &bin_name)
}

/// Writes a finished artifact in one shot, carrying the destination path in
/// any failure. Nothing is written until the whole artifact is computed, so a
/// failed run leaves no partial output behind.
pub(super) fn write_artifact(output: &PathBuf, artifact: &str) -> crate::error::Result<()> {
    std::fs::write(output, artifact)
        .map_err(|error| crate::error::TypedropError::io_error(output, error))
}

/// Arguments for the `encode-dropper` subcommand.
///
/// The command reads the input binary, compresses it at the highest deflate
/// level, base64-encodes the result and embeds it in the PowerShell
/// self-extraction template written to the output path.
#[derive(Debug, Clone, Args)]
#[command(name = "encode-dropper")]
pub struct EncodeDropperSubCommand {
    /// Input binary file to compress and encode
    #[arg(long = "in", required = true)]
    input: PathBuf,

    /// Output path for the generated PowerShell script
    #[arg(long = "out", required = true)]
    output: PathBuf,

    /// Filename to write on the target system (default: input file's base name)
    #[arg(short = 'b', long = "bin-name")]
    bin_name: Option<String>,
}

impl CommandHandler for EncodeDropperSubCommand {
    /// Execute the dropper-generation flow.
    ///
    /// 1. Read the input binary fully into memory.
    /// 2. Compress and base64-encode it.
    /// 3. Render the dropper template with the resolved target filename.
    /// 4. Write the script to the output path in a single operation.
    fn handle(self) -> crate::error::Result<()> {
        let input = super::expand_path(&self.input);
        let output = super::expand_path(&self.output);

        let script = build_dropper(&input, self.bin_name)?;
        write_artifact(&output, &script)?;

        println!(
            "[+] Wrote the PS1 script to {}\n\t Run: cat {} |xclip -selection clipboard",
            output.to_string_lossy(),
            output.to_string_lossy()
        );

        Ok(())
    }
}
