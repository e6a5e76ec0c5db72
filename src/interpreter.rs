use std::io::{self, ErrorKind, Read, Write};

use crate::instruction::Instruction;
use crate::options::{EofPolicy, Options, OutputFormat};
use crate::tape::Tape;

/// Errors that abort a run.
///
/// Every variant carries the 1-based position of the instruction that was
/// executing when the failure occurred.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    /// A `[` has no matching `]` before the program ends.
    #[error("Unbalanced loop: '[' at instruction {position} is never closed")]
    UnbalancedLoop { position: usize },

    /// A `]` was reached while no loop body was executing.
    #[error("Unmatched loop end: ']' at instruction {position} has no open '['")]
    UnmatchedLoopEnd { position: usize },

    /// The injected output sink or input source failed.
    #[error("I/O error at instruction {position}: {source}")]
    Io {
        position: usize,
        #[source]
        source: io::Error,
    },
}

impl InterpreterError {
    pub fn position(&self) -> usize {
        match self {
            InterpreterError::UnbalancedLoop { position }
            | InterpreterError::UnmatchedLoopEnd { position }
            | InterpreterError::Io { position, .. } => *position,
        }
    }
}

/// A single-use interpreter for one program.
///
/// The interpreter maintains:
/// - the program as a sequence of `char`s (non-instruction characters are comments),
/// - a [`Tape`] of byte cells with its cell pointer,
/// - the instruction pointer,
/// - a stack holding the positions of the `[` whose bodies are currently executing.
pub struct Interpreter {
    program: Vec<char>,
    tape: Tape,
    ip: usize,
    loop_stack: Vec<usize>,
    options: Options,
    // Set when the failing instruction is not the one under the instruction pointer.
    fault: Option<usize>,
}

impl Interpreter {
    /// Create an interpreter with the default [`Options`] (30,000 growable cells).
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_options(program, Options::default())
    }

    /// Create an interpreter with a custom starting tape size.
    pub fn with_tape_size(program: impl Into<String>, tape_size: usize) -> Self {
        Self::with_options(
            program,
            Options {
                tape_size,
                ..Options::default()
            },
        )
    }

    pub fn with_options(program: impl Into<String>, options: Options) -> Self {
        Self {
            program: program.into().chars().collect(),
            tape: Tape::new(options.tape_size, options.tape_mode),
            ip: 0,
            loop_stack: Vec::new(),
            options,
            fault: None,
        }
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Number of loops whose bodies are currently executing.
    pub fn loop_depth(&self) -> usize {
        self.loop_stack.len()
    }

    pub fn is_finished(&self) -> bool {
        self.ip >= self.program.len()
    }

    /// 1-based position of the current instruction, or of the failing one after an error.
    pub fn position(&self) -> usize {
        self.fault.unwrap_or(self.ip + 1)
    }

    pub fn increment(&mut self) {
        self.tape.increment();
    }

    pub fn decrement(&mut self) {
        self.tape.decrement();
    }

    pub fn shift_left(&mut self) {
        self.tape.shift_left();
    }

    pub fn shift_right(&mut self) {
        self.tape.shift_right();
    }

    /// Write the current cell to `output` in the configured [`OutputFormat`].
    pub fn output<W: Write>(&self, output: &mut W) -> Result<(), InterpreterError> {
        let cell = self.tape.current();
        let written = match self.options.output_format {
            OutputFormat::Char => output.write_all(&[cell]),
            OutputFormat::Numeral => write!(output, "{cell} "),
        };
        written.map_err(|source| self.io_error(source))
    }

    /// Read exactly one byte from `input` into the current cell.
    /// At end of input the configured [`EofPolicy`] decides what is stored.
    pub fn input<R: Read>(&mut self, input: &mut R) -> Result<(), InterpreterError> {
        let mut buf = [0u8; 1];
        loop {
            match input.read(&mut buf) {
                Ok(0) => {
                    match self.options.eof {
                        EofPolicy::Zero => self.tape.set_current(0),
                        EofPolicy::Max => self.tape.set_current(u8::MAX),
                        EofPolicy::Unchanged => {}
                    }
                    return Ok(());
                }
                Ok(_) => {
                    self.tape.set_current(buf[0]);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => return Err(self.io_error(source)),
            }
        }
    }

    /// Resolve the `[` under the instruction pointer.
    ///
    /// A zero guard skips the body by scanning forward for the matching `]`;
    /// otherwise the loop is pushed and its body starts executing.
    pub fn start_loop(&mut self) -> Result<(), InterpreterError> {
        if self.tape.current() == 0 {
            let Some(end) = self.find_loop_end() else {
                return Err(InterpreterError::UnbalancedLoop {
                    position: self.position(),
                });
            };
            self.ip = end + 1;
        } else {
            self.loop_stack.push(self.ip);
            self.ip += 1;
        }
        Ok(())
    }

    /// Resolve the `]` under the instruction pointer.
    ///
    /// A zero guard leaves the loop; otherwise execution resumes right after
    /// the innermost open `[` without re-checking it.
    pub fn end_loop(&mut self) -> Result<(), InterpreterError> {
        let Some(&start) = self.loop_stack.last() else {
            return Err(InterpreterError::UnmatchedLoopEnd {
                position: self.position(),
            });
        };
        if self.tape.current() == 0 {
            self.loop_stack.pop();
            self.ip += 1;
        } else {
            self.ip = start + 1;
        }
        Ok(())
    }

    /// Index of the `]` closing the `[` under the instruction pointer.
    fn find_loop_end(&self) -> Option<usize> {
        let mut depth = 1usize;
        for (i, &c) in self.program.iter().enumerate().skip(self.ip + 1) {
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn io_error(&self, source: io::Error) -> InterpreterError {
        InterpreterError::Io {
            position: self.position(),
            source,
        }
    }

    /// Execute the instruction under the instruction pointer.
    ///
    /// Returns `Ok(true)` while there is more program left to run.
    pub fn step<W: Write, R: Read>(
        &mut self,
        output: &mut W,
        input: &mut R,
    ) -> Result<bool, InterpreterError> {
        if self.is_finished() {
            return Ok(false);
        }

        match Instruction::from_char(self.program[self.ip]) {
            Some(Instruction::Increment) => {
                self.increment();
                self.ip += 1;
            }
            Some(Instruction::Decrement) => {
                self.decrement();
                self.ip += 1;
            }
            Some(Instruction::ShiftLeft) => {
                self.shift_left();
                self.ip += 1;
            }
            Some(Instruction::ShiftRight) => {
                self.shift_right();
                self.ip += 1;
            }
            Some(Instruction::Output) => {
                self.output(output)?;
                self.ip += 1;
            }
            Some(Instruction::Input) => {
                // Make pending output (e.g. a prompt) visible before blocking on input.
                output.flush().map_err(|source| self.io_error(source))?;
                self.input(input)?;
                self.ip += 1;
            }
            Some(Instruction::LoopStart) => self.start_loop()?,
            Some(Instruction::LoopEnd) => self.end_loop()?,
            None => self.ip += 1,
        }

        Ok(!self.is_finished())
    }

    /// Execute the program until completion.
    ///
    /// Returns `Ok(())` on success or an [`InterpreterError`] on failure. The
    /// output sink is flushed before returning successfully.
    pub fn run<W: Write, R: Read>(
        &mut self,
        output: &mut W,
        input: &mut R,
    ) -> Result<(), InterpreterError> {
        while self.step(output, input)? {}

        if let Some(&open) = self.loop_stack.last() {
            self.fault = Some(open + 1);
            return Err(InterpreterError::UnbalancedLoop {
                position: open + 1,
            });
        }

        output.flush().map_err(|source| self.io_error(source))
    }
}
