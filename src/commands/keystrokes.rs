/*!
Keystroke-synthesis subcommand for the typedrop CLI.

Consumes an arbitrary text file (typically a generated dropper script) and
produces the xte instruction sequence that types it into a focused remote
console, printing the estimated total replay duration. The command implements
`CommandHandler` and performs its work when `handle()` is invoked by the
top-level CLI dispatch.
*/

use clap::Args;
use std::path::PathBuf;

use crate::synth::{synthesize, SynthConfig, Synthesis};
use crate::CommandHandler;

/// Validates the user-supplied timing parameters.
///
/// A negative or non-finite focus delay or rate multiplier has no meaningful
/// event-pause interpretation and would collapse every pause to zero, so both
/// are rejected up front, before any input is read.
///
/// # Errors
/// Returns a validation error if either value is negative or not finite.
pub(super) fn validate_timing(focus_delay: f64, rate: f64) -> crate::error::Result<()> {
    if !focus_delay.is_finite() || focus_delay < 0.0 {
        return Err(crate::error::TypedropError::validation_error(
            "focus delay must be a non-negative number of seconds",
        ));
    }
    if !rate.is_finite() || rate < 0.0 {
        return Err(crate::error::TypedropError::validation_error(
            "rate multiplier must be a non-negative number",
        ));
    }

    Ok(())
}

/// Serializes a synthesis result to the output path and reports the replay
/// estimate. Shared with the fused `drop` pipeline.
pub(super) fn write_keystroke_script(
    output: &PathBuf,
    synthesis: &Synthesis,
) -> crate::error::Result<()> {
    super::dropper::write_artifact(output, &synthesis.render())?;

    println!(
        "[+] Estimated time to execute xte script: {}",
        synthesis.human_duration()
    );
    println!(
        "[+] Wrote the XTE script to {}\n\t Run: cat {} |xte",
        output.to_string_lossy(),
        output.to_string_lossy()
    );

    Ok(())
}

/// Arguments for the `synthesize-keystrokes` subcommand.
#[derive(Debug, Clone, Args)]
#[command(name = "synthesize-keystrokes")]
pub struct SynthesizeKeystrokesSubCommand {
    /// Input text file to convert into keystrokes
    #[arg(long = "in", required = true)]
    input: PathBuf,

    /// Output path for the generated xte script
    #[arg(long = "out", required = true)]
    output: PathBuf,

    /// Delay before typing starts, in seconds
    #[arg(long = "focus-delay", default_value_t = 10.0)]
    focus_delay: f64,

    /// Sleep multiplier applied to every inter-keystroke pause
    #[arg(long = "rate", default_value_t = 2.0)]
    rate: f64,
}

impl CommandHandler for SynthesizeKeystrokesSubCommand {
    /// Execute the keystroke-synthesis flow.
    ///
    /// 1. Read the input text fully into memory.
    /// 2. Synthesize the timed event sequence under the configured focus
    ///    delay and rate multiplier.
    /// 3. Write the serialized script in a single operation and print the
    ///    replay duration estimate.
    fn handle(self) -> crate::error::Result<()> {
        validate_timing(self.focus_delay, self.rate)?;

        let input = super::expand_path(&self.input);
        let output = super::expand_path(&self.output);

        log::info!("Reading text {}", input.to_string_lossy());
        let text = std::fs::read_to_string(&input)
            .map_err(|error| crate::error::TypedropError::io_error(&input, error))?;

        log::info!(
            "Synthesizing keystrokes (focus delay {}s, rate x{})",
            self.focus_delay,
            self.rate
        );
        let synthesis = synthesize(
            &text,
            &SynthConfig {
                focus_delay: self.focus_delay,
                rate_multiplier: self.rate,
            },
        );

        write_keystroke_script(&output, &synthesis)
    }
}
