use std::{fs, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::Parser;
use icss::{
    check_source, compile_source,
    errors::errors::{CompileError, Error},
    format_error, CompileOptions,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Compiles ICSS stylesheets to CSS.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// ICSS source file
    input: PathBuf,
    /// Write the CSS here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Stop after semantic checking
    #[arg(long)]
    check: bool,
    /// Spaces before each declaration
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %cli.input.display(), "failed to read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("shell"));

    match run(&cli, &source, &file_name) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(css)) => write_output(cli.output.as_ref(), &css),
        Err(CompileError::Semantic(diagnostics)) => {
            for diagnostic in &diagnostics {
                eprintln!("{}: {}", file_name, diagnostic);
            }
            eprintln!("{}", CompileError::Semantic(diagnostics));
            ExitCode::FAILURE
        }
        Err(CompileError::Syntax(err)) | Err(CompileError::Evaluation(err)) => {
            display_error(&err, &source, &cli.input);
            ExitCode::FAILURE
        }
    }
}

/// Returns the generated CSS, or `None` when only checking.
fn run(cli: &Cli, source: &str, file_name: &str) -> Result<Option<String>, CompileError> {
    let options = CompileOptions {
        file_name: Some(String::from(file_name)),
        indent_width: cli.indent,
    };
    let start = Instant::now();

    if cli.check {
        check_source(source, &options)?;
        info!("No errors found in {:?}", start.elapsed());
        return Ok(None);
    }

    let css = compile_source(source, &options)?;
    info!("Compiled in {:?}", start.elapsed());

    Ok(Some(css))
}

fn write_output(output: Option<&PathBuf>, css: &str) -> ExitCode {
    let Some(path) = output else {
        print!("{}", css);
        return ExitCode::SUCCESS;
    };

    match fs::write(path, css) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(path = %path.display(), "failed to write output: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn display_error(error: &Error, source: &str, file: &Path) {
    eprint!("{}", format_error(error, source, &file.to_string_lossy()));
}
