use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use treelox::{Lox, diagnostics::Diagnostics, session::EXIT_IO_ERROR};

/// treelox runs programs written in a small Lox-style expression language.
///
/// Without contents it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells treelox to read the script from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints every scanned token to standard error before running.
    #[arg(long)]
    tokens: bool,

    /// Prints every parsed statement to standard error before running.
    #[arg(long)]
    ast: bool,

    contents: Option<String>,
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer()
                                               .with_writer(io::stderr)
                                               .with_target(true)
                                               .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut lox = Lox::new(io::stdout(), Diagnostics::stderr()).with_token_dump(args.tokens)
                                                               .with_ast_dump(args.ast);

    let result = match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(EXIT_IO_ERROR.into());
                         });
            lox.run(&script)
        },
        Some(script) => lox.run(&script),
        None => lox.run_prompt(io::stdin().lock(), &mut io::stdout()),
    };

    let code = lox.exit_code();
    if let Err(e) = result.and_then(|()| lox.into_output().flush()) {
        eprintln!("Failed to write output: {e}");
        return ExitCode::from(EXIT_IO_ERROR);
    }

    ExitCode::from(code)
}
