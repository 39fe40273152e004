//! CLI command definitions and dispatch for typedrop.
//!
//! This module contains the top-level CLI wiring used by the `typedrop`
//! binary. It defines the `Cli` struct parsed by `clap`, an `Operations` enum
//! for the supported subcommands and implements a small dispatch mechanism
//! that calls into the concrete command implementations located in the
//! sibling command modules.
//!
//! Design goals:
//! - Keep parsing and dispatch logic minimal; command implementations perform
//!   the actual IO and transformation work.
//! - Use ownership when invoking handlers so commands can move resources
//!   (paths, buffers) without additional cloning.

use crate::CommandHandler;
use clap::{Parser, Subcommand};

/// Top-level CLI structure parsed from program arguments.
///
/// The `Cli` struct is the entry point for command-line parsing and contains a
/// single `operation_type` field which represents one of the supported
/// subcommands. The struct uses `clap`'s `Parser` derive to provide argument
/// parsing and `--version` handling.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// The operation/subcommand to execute.
    #[command(subcommand)]
    pub operation_type: Operations,
}

impl Cli {
    /// Dispatch and execute the selected subcommand.
    ///
    /// This consumes the `Cli` instance and delegates to the underlying
    /// `Operations::handle` implementation.
    pub fn handle(self) -> crate::error::Result<()> {
        self.operation_type.handle()
    }
}

/// Supported top-level operations/subcommands.
///
/// Each variant corresponds to one stage of the delivery pipeline (or the
/// fused pipeline). Variants wrap the concrete argument structs implemented
/// in the sibling command modules.
#[derive(Debug, Subcommand)]
pub enum Operations {
    /// Compress and encode a binary into a self-extracting PowerShell script.
    #[command(name = "encode-dropper")]
    EncodeDropper(super::dropper::EncodeDropperSubCommand),

    /// Convert a text file into a timed xte keystroke-injection script.
    #[command(name = "synthesize-keystrokes")]
    SynthesizeKeystrokes(super::keystrokes::SynthesizeKeystrokesSubCommand),

    /// Run the full pipeline: binary -> dropper -> keystroke script.
    #[command(name = "drop")]
    Deploy(super::deploy::DeploySubCommand),
}

impl CommandHandler for Operations {
    /// Execute the selected operation.
    ///
    /// The method consumes the `Operations` enum and passes control to the
    /// concrete command handler for the selected variant.
    fn handle(self) -> crate::error::Result<()> {
        match self {
            Operations::EncodeDropper(encode_sub_cmd) => encode_sub_cmd.handle()?,
            Operations::SynthesizeKeystrokes(synth_sub_cmd) => synth_sub_cmd.handle()?,
            Operations::Deploy(deploy_sub_cmd) => deploy_sub_cmd.handle()?,
        };

        Ok(())
    }
}
