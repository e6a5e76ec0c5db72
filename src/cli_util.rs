use std::io::{self, Write};
use crate::InterpreterError;

/// Pretty-print a structured InterpreterError with caret positioning.
/// If `program` is `Some("bfint")`, prefix messages with "bfint: ..."
pub fn print_interpreter_error(program: Option<&str>, code: &str, err: &InterpreterError) {
    let _ = write_interpreter_error(&mut io::stderr(), program, code, err);
    let _ = io::stderr().flush();
}

/// Render an InterpreterError into `out`. Split from the printer so it can be tested.
pub fn write_interpreter_error<W: Write>(
    out: &mut W,
    program: Option<&str>,
    code: &str,
    err: &InterpreterError,
) -> io::Result<()> {
    let prefix_program = |msg: &str| {
        if let Some(p) = program {
            format!("{p}: {msg}")
        } else {
            msg.to_string()
        }
    };

    let msg = match err {
        InterpreterError::UnbalancedLoop { .. } => {
            prefix_program("Runtime error: unbalanced loop, '[' has no matching ']'")
        }
        InterpreterError::UnmatchedLoopEnd { .. } => {
            prefix_program("Runtime error: unmatched loop end, ']' has no open '['")
        }
        InterpreterError::Io { source, .. } => prefix_program(&format!("I/O error: {source}")),
    };
    write_error_with_context(out, &msg, code, err.position())
}

/// Write a concise error with the 1-based instruction position, its line and
/// column, and a caret under the offending character of that line.
pub fn write_error_with_context<W: Write>(
    out: &mut W,
    prefix: &str,
    code: &str,
    position: usize,
) -> io::Result<()> {
    // Show at most this many characters on either side of the caret
    const WINDOW_CHARS: usize = 32;

    let index = position.saturating_sub(1);
    let (line_no, line, column) = locate(code, index);

    writeln!(out, "{prefix} at instruction {position} (line {line_no}, column {})", column + 1)?;

    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return Ok(());
    }
    let start = column.saturating_sub(WINDOW_CHARS);
    let end = (column + WINDOW_CHARS + 1).min(chars.len());
    let slice: String = chars[start..end].iter().collect();
    writeln!(out, "  {}", slice)?;

    // Caret under the exact position
    let underline = format!("{}^", " ".repeat(column - start));
    writeln!(out, "  {}", underline)
}

/// Find the 1-based line number, the line text, and the 0-based column of the
/// char at `index`. Positions past the end land after the last character.
fn locate(code: &str, index: usize) -> (usize, &str, usize) {
    let mut line_no = 1;
    let mut line_start = 0usize; // byte offset
    let mut column = 0usize;

    for (count, (byte_idx, ch)) in code.char_indices().enumerate() {
        if count == index {
            break;
        }
        if ch == '\n' {
            line_no += 1;
            line_start = byte_idx + ch.len_utf8();
            column = 0;
        } else {
            column += 1;
        }
    }

    let rest = &code[line_start..];
    let line = rest.split('\n').next().unwrap_or("").trim_end_matches('\r');
    (line_no, line, column)
}
