use std::io::{self, BufRead};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use bitexpr::{DisplayMode, Engine, EngineConfig, Signedness, SizeMode, DEFAULT_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Width {
    #[value(name = "8")]
    Byte,
    #[value(name = "16")]
    Word,
    #[value(name = "32")]
    Dword,
    #[value(name = "64")]
    Qword,
}

impl From<Width> for SizeMode {
    fn from(width: Width) -> Self {
        match width {
            Width::Byte => SizeMode::Byte,
            Width::Word => SizeMode::Word,
            Width::Dword => SizeMode::Dword,
            Width::Qword => SizeMode::Qword,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Radix {
    Bin,
    Oct,
    Dec,
    Hex,
}

impl From<Radix> for DisplayMode {
    fn from(radix: Radix) -> Self {
        match radix {
            Radix::Bin => DisplayMode::Binary,
            Radix::Oct => DisplayMode::Octal,
            Radix::Dec => DisplayMode::Decimal,
            Radix::Hex => DisplayMode::Hex,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bitexpr",
    version,
    about = "Evaluate fixed-width integer expressions",
    long_about = "bitexpr evaluates infix integer expressions with wraparound at a fixed bit width.\n\n\
        EXAMPLES:\n\
        \n  bitexpr '1+2+3*(5+2)'                 Evaluate at 64 bits\n\
        \n  bitexpr -w 8 '250 + 21'               Wrap at 8 bits\n\
        \n  bitexpr -w 16 --signed -f hex -- -1   Signed 16-bit, print in hex\n\
        \n  echo '0x1A << 2' | bitexpr            Evaluate each line of stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Bit width results wrap to
    #[arg(short, long, value_enum, default_value = "64")]
    width: Width,

    /// Interpret operands as two's complement
    #[arg(short, long)]
    signed: bool,

    /// Output radix
    #[arg(short, long, value_enum, default_value = "dec")]
    format: Radix,

    /// Maximum tokens per expression
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Also print the folded tree
    #[arg(long)]
    tree: bool,

    /// Expressions to evaluate (reads lines from stdin if none are given)
    #[arg(value_name = "EXPR")]
    exprs: Vec<String>,
}

impl Cli {
    fn config(&self) -> EngineConfig {
        let signedness = if self.signed {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        };
        EngineConfig::default()
            .with_capacity(self.capacity)
            .with_size_mode(self.width.into())
            .with_signedness(signedness)
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Evaluates one line, printing the result or the error. Returns whether it
/// succeeded.
fn run_one(engine: &mut Engine, text: &str, cli: &Cli) -> bool {
    match engine.evaluate_str(text) {
        Ok(number) => {
            if cli.tree {
                println!("{}", engine.expression());
            }
            println!("{}", number.format(cli.format.into()));
            true
        }
        Err(err) => {
            eprintln!("error: {text}: {err}");
            false
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut engine = match Engine::new(cli.config()) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };

    let mut ok = true;
    if cli.exprs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("error: failed to read from stdin: {err}");
                    return 2;
                }
            };
            if !line.trim().is_empty() {
                ok &= run_one(&mut engine, line.trim(), &cli);
            }
        }
    } else {
        for text in &cli.exprs {
            ok &= run_one(&mut engine, text, &cli);
        }
    }

    if ok {
        0
    } else {
        1
    }
}

fn main() {
    std::process::exit(run_cli());
}
