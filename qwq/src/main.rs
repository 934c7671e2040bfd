use clap::Parser;
use console::style;
use qwq::{Error, Session};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

const PROMPT: &str = "QWQ >> ";

/// Interpreter for the qwq language. Starts a REPL when no file is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the tokens of each input before running it.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program instead of evaluating it.
    #[arg(long)]
    ast: bool,

    /// Script to run.
    file: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match &args.file {
        Some(path) => run_file(&args, path),
        None => repl(&args),
    };
    match result {
        Ok(true) => {}
        Ok(false) => process::exit(65),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(74);
        }
    }
}

fn repl(args: &Args) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let mut session = Session::new();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(true);
        }

        run(args, &mut session, &line, &mut stdout)?;
    }
}

fn run_file(args: &Args, path: &Path) -> io::Result<bool> {
    let source = fs::read_to_string(path).map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("could not read {}: {}", path.display(), err),
        )
    })?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    run(args, &mut Session::new(), &source, &mut stdout)
}

/// Runs `source` and writes its result or errors to `out`. Returns `false` if `source` failed.
fn run(args: &Args, session: &mut Session, source: &str, out: &mut impl Write) -> io::Result<bool> {
    if args.tokens {
        for token in qwq::tokenize(source) {
            writeln!(out, "{} {}", style(token.kind).dim(), token.literal)?;
        }
    }

    if args.ast {
        return match qwq::parse(source) {
            Ok(program) => {
                writeln!(out, "{}", program)?;
                Ok(true)
            }
            Err(err) => {
                print_error(out, &err)?;
                Ok(false)
            }
        };
    }

    match session.run(source) {
        Ok(Some(value)) => {
            writeln!(out, "{}", value)?;
            Ok(true)
        }
        Ok(None) => Ok(true),
        Err(err) => {
            print_error(out, &err)?;
            Ok(false)
        }
    }
}

fn print_error(out: &mut impl Write, err: &Error) -> io::Result<()> {
    match err {
        Error::Syntax(errors) => {
            for error in errors {
                writeln!(out, "{}", style(error).red())?;
            }
        }
        Error::Runtime(error) => writeln!(out, "{} {}", style("ERROR:").red().bold(), error)?,
    }
    Ok(())
}
