//! A tiny interactive command shell.
//!
//! This crate provides a minimal read-eval loop: it prompts with the current
//! working directory and username, reads one line at a time, runs a small
//! fixed set of built-in commands in-process, and hands everything else to
//! the operating system's process launcher. It is intentionally small and
//! easy to read.
//!
//! The main entry point is [`Repl`], which owns the loop and the cooperative
//! exit signaling. The public module [`env`] exposes the trait used to
//! abstract the process environment, so tests can run builtins against an
//! in-memory provider instead of mutating the real filesystem.

mod builtin;
mod dispatch;
pub mod env;
mod error;
mod external;
mod lexer;
mod prompt;
mod repl;
mod signal;

pub use error::ShellError;
pub use repl::Repl;
