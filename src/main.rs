use bfint::cli_util::print_interpreter_error;
use bfint::options::MAX_TAPE_SIZE;
use bfint::{EofPolicy, Interpreter, Options, OutputFormat, TapeMode};
use clap::Parser;
use std::env;
use std::fs;
use std::io::{self, Write};

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [OPTIONS] <FILE>   # Run the Brainfuck program stored in FILE

Options:
  --tape-size <N>      Starting number of cells (fallback BFINT_TAPE_SIZE; default 30000)
  --fixed-tape         Do not grow the tape; '>' on the last cell is a no-op (fallback BFINT_FIXED_TAPE)
  --numeric            Print cells as decimal numbers followed by a space (fallback BFINT_NUMERIC)
  --eof <POLICY>       Value stored by ',' at end of input: zero, unchanged or max (fallback BFINT_EOF; default zero)
  --help,  -h          Show this help

Notes:
- Input (`,`) reads a single byte from stdin.
- Characters outside of Brainfuck's ><+-.,[] are comments.
- '<' on the first cell is a no-op; by default the tape grows when '>' runs past its end.

Examples:
- Run a program:
    {0} ./hello.bf
- Feed a file to the program's input:
    {0} ./cat.bf < input.txt
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bfint", disable_help_flag = true)]
struct Cli {
    /// Path of the Brainfuck program to run
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Starting number of cells
    #[arg(long = "tape-size", value_name = "N")]
    tape_size: Option<usize>,

    /// Keep the tape at its starting size
    #[arg(long = "fixed-tape")]
    fixed_tape: bool,

    /// Print cells as decimal numbers instead of raw bytes
    #[arg(long = "numeric")]
    numeric: bool,

    /// Value stored by ',' at end of input
    #[arg(long = "eof", value_name = "POLICY")]
    eof: Option<EofPolicy>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,
}

/// Interpret an environment variable as a boolean switch.
fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Resolve interpreter options: flags -> env -> defaults
fn resolve_options(cli: &Cli) -> Result<Options, String> {
    let defaults = Options::default();

    let tape_size = cli
        .tape_size
        .or_else(|| env::var("BFINT_TAPE_SIZE").ok().and_then(|s| s.trim().parse::<usize>().ok()))
        .unwrap_or(defaults.tape_size);
    if tape_size > MAX_TAPE_SIZE {
        return Err(format!(
            "tape size {tape_size} exceeds the maximum of {MAX_TAPE_SIZE} cells"
        ));
    }
    let tape_mode = if cli.fixed_tape || env_flag("BFINT_FIXED_TAPE") {
        TapeMode::Fixed
    } else {
        TapeMode::Growable
    };
    let output_format = if cli.numeric || env_flag("BFINT_NUMERIC") {
        OutputFormat::Numeral
    } else {
        OutputFormat::Char
    };
    let eof = cli
        .eof
        .or_else(|| env::var("BFINT_EOF").ok().and_then(|s| s.parse::<EofPolicy>().ok()))
        .unwrap_or(defaults.eof);

    Ok(Options {
        tape_size,
        tape_mode,
        output_format,
        eof,
    })
}

fn run(program: &str, cli: Cli) -> i32 {
    if cli.help {
        usage_and_exit(program, 0);
    }

    let Some(path) = cli.file.as_deref() else {
        eprintln!("{program}: no program file provided");
        usage_and_exit(program, 2);
    };

    let options = match resolve_options(&cli) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{program}: {msg}");
            let _ = io::stderr().flush();
            return 1;
        }
    };

    // Comments may hold arbitrary bytes; invalid UTF-8 becomes inert replacement chars.
    let code = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            eprintln!("{program}: failed to read program file '{path}': {e}");
            let _ = io::stderr().flush();
            return 1;
        }
    };

    // Flush whatever the program printed before an interrupt, then exit.
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(130);
    }) {
        eprintln!("{program}: failed to set ctrl+c handler: {e}");
        let _ = io::stderr().flush();
        return 1;
    }

    let mut bf = Interpreter::with_options(code.as_str(), options);

    // Unlocked handles so the interrupt handler can still flush stdout.
    let mut stdout = io::stdout();
    let mut stdin = io::stdin();

    if let Err(err) = bf.run(&mut stdout, &mut stdin) {
        let _ = stdout.flush();
        print_interpreter_error(Some(program), &code, &err);
        return 1;
    }

    0
}

fn main() {
    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("bfint"));

    let cli = Cli::parse();
    let code = run(&program, cli);

    std::process::exit(code);
}
