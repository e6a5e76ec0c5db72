use std::fmt;
use std::str::FromStr;

/// Number of cells a fresh tape starts with.
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

/// Largest starting tape the command line accepts (1 GiB of cells).
pub const MAX_TAPE_SIZE: usize = 1 << 30;

/// Number of zeroed cells appended when a growable tape runs out.
pub const GROW_CHUNK: usize = 100;

/// What `>` does at the last cell of the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapeMode {
    /// Append `GROW_CHUNK` zeroed cells, then move.
    #[default]
    Growable,
    /// Stay on the last cell.
    Fixed,
}

/// How `.` renders the current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The cell value as a single raw byte.
    #[default]
    Char,
    /// The cell value as a decimal numeral followed by a space, e.g. `65 `.
    Numeral,
}

/// What `,` stores when the input source is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofPolicy {
    #[default]
    Zero,
    Unchanged,
    Max,
}

impl FromStr for EofPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(Self::Zero),
            "unchanged" | "keep" => Ok(Self::Unchanged),
            "max" | "255" => Ok(Self::Max),
            other => Err(format!(
                "unknown EOF policy '{other}' (expected zero, unchanged or max)"
            )),
        }
    }
}

impl fmt::Display for EofPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EofPolicy::Zero => write!(f, "zero"),
            EofPolicy::Unchanged => write!(f, "unchanged"),
            EofPolicy::Max => write!(f, "max"),
        }
    }
}

/// Per-instance interpreter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub tape_size: usize,     // Starting number of cells (at least 1 is always allocated)
    pub tape_mode: TapeMode,
    pub output_format: OutputFormat,
    pub eof: EofPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            tape_mode: TapeMode::default(),
            output_format: OutputFormat::default(),
            eof: EofPolicy::default(),
        }
    }
}
