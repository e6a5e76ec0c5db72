//! A tiny Brainfuck interpreter library.
//!
//! This crate provides a minimal Brainfuck interpreter that operates on a
//! memory tape (default 30,000 cells) with a single data pointer.
//!
//! Features and behaviors:
//! - Memory tape initialized to 0; cells wrap on overflow and underflow.
//! - Moving left from cell 0 is a no-op. Moving right past the last cell grows
//!   the tape by 100 zeroed cells (or is a no-op with [`TapeMode::Fixed`]).
//! - Input `,` reads a single byte from the injected reader; on EOF the current
//!   cell is set to 0 by default (see [`EofPolicy`]).
//! - Output `.` writes the byte at the current cell (or its decimal value with
//!   [`OutputFormat::Numeral`]) to the injected writer.
//! - Loops are resolved while running; an unclosed `[` or a stray `]` aborts
//!   with an error carrying the 1-based instruction position.
//! - Any non-Brainfuck character is a comment.
//!
//! Quick start:
//!
//! ```
//! use bfint::Interpreter;
//!
//! let mut bf = Interpreter::new("read a byte , and echo it back .");
//! let mut output = Vec::new();
//! let mut input: &[u8] = b"A";
//! bf.run(&mut output, &mut input).expect("program should run");
//! assert_eq!(output, b"A");
//! ```

pub mod cli_util;
pub mod instruction;
pub mod interpreter;
pub mod options;
pub mod tape;

pub use instruction::Instruction;
pub use interpreter::{Interpreter, InterpreterError};
pub use options::{EofPolicy, Options, OutputFormat, TapeMode};
pub use tape::Tape;
