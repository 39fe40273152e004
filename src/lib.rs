//! Typedrop library.
//!
//! This crate provides the core pieces used by the `typedrop` binary:
//! - The `commands` module contains CLI subcommands and wiring to execute the
//!   pipeline stages (dropper generation, keystroke synthesis, fused drop).
//! - The `encoder` module compresses raw payload bytes and encodes them into
//!   the transport-safe text embedded in generated scripts.
//! - The `dropper` module renders the PowerShell self-extraction template.
//! - The `keymap` module is the character -> key-action lookup table for the
//!   keystroke synthesizer.
//! - The `synth` module turns arbitrary text into a timed xte event sequence
//!   and accounts for its total replay duration.
//! - The `error` module defines error types used across the library.
//!
//! The library exposes a small `CommandHandler` trait which CLI types implement
//! to perform their respective operation when invoked by the CLI entrypoint.
//!
//! Design notes:
//! - Ownership is preferred for command handlers: `handle(self)` consumes the
//!   command struct so implementations can move resources (paths, buffers)
//!   without cloning.
//! - The codec and synthesis modules are pure transforms kept separate from
//!   command implementations so they can be reused and tested independently.
pub mod commands;
pub mod dropper;
pub mod encoder;
pub mod error;
pub mod keymap;
pub mod synth;

/// A thin abstraction implemented by CLI command structs to execute work.
///
/// Implementors should perform whatever IO or processing the command
/// represents inside `handle`. The method takes ownership of `self` so
/// implementors can move owned fields (file paths, configuration) without
/// requiring extra cloning.
///
/// Example use:
/// - Constructed by the `clap`-generated CLI parser and then dispatched from `main`.
pub trait CommandHandler {
    /// Execute the command, consuming the implementor.
    fn handle(self) -> crate::error::Result<()>;
}
