/*!
Fused pipeline subcommand for the typedrop CLI.

Runs the whole delivery chain in one invocation: read the binary, generate
the self-extracting dropper in memory, and synthesize the keystroke script
that types it. Equivalent to `encode-dropper` piped into
`synthesize-keystrokes` without materializing the intermediate script.
*/

use clap::Args;
use std::path::PathBuf;

use crate::synth::{synthesize, SynthConfig};
use crate::CommandHandler;

/// Arguments for the `drop` subcommand.
#[derive(Debug, Clone, Args)]
#[command(name = "drop")]
pub struct DeploySubCommand {
    /// Input binary file to compress and encode
    #[arg(long = "in", required = true)]
    input: PathBuf,

    /// Output path for the generated xte script
    #[arg(long = "out", required = true)]
    output: PathBuf,

    /// Filename to write on the target system (default: input file's base name)
    #[arg(short = 'b', long = "bin-name")]
    bin_name: Option<String>,

    /// Delay before typing starts, in seconds
    #[arg(long = "focus-delay", default_value_t = 10.0)]
    focus_delay: f64,

    /// Sleep multiplier applied to every inter-keystroke pause
    #[arg(long = "rate", default_value_t = 2.0)]
    rate: f64,
}

impl CommandHandler for DeploySubCommand {
    /// Execute the fused binary -> dropper -> keystrokes flow.
    fn handle(self) -> crate::error::Result<()> {
        super::keystrokes::validate_timing(self.focus_delay, self.rate)?;

        let input = super::expand_path(&self.input);
        let output = super::expand_path(&self.output);

        let dropper_script = super::dropper::build_dropper(&input, self.bin_name)?;

        log::info!(
            "Synthesizing keystrokes for {} script characters (focus delay {}s, rate x{})",
            dropper_script.len(),
            self.focus_delay,
            self.rate
        );
        let synthesis = synthesize(
            &dropper_script,
            &SynthConfig {
                focus_delay: self.focus_delay,
                rate_multiplier: self.rate,
            },
        );

        super::keystrokes::write_keystroke_script(&output, &synthesis)
    }
}
