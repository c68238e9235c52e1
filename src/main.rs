use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use prolog_parser::{
    config::DEFAULT_MAX_DEPTH, errors::errors::ErrorTip, format_error, parse_with_config,
    Nonterminal, ParserConfig,
};

#[derive(Parser, Debug)]
#[command(version, about = "Parse a program and print its parse tree")]
struct Args {
    /// Source file to parse.
    input: PathBuf,

    /// Nonterminal used as the grammar root.
    #[arg(short, long, default_value = "prolog")]
    start: Nonterminal,

    /// Where to write the rendered tree or diagnostic. Defaults to `<input>.out`.
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the rendered tree or diagnostic instead of writing a file.
    #[arg(long)]
    stdout: bool,

    /// Maximum nesting of parenthesised groups and lists.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let mut path = self.input.clone().into_os_string();
            path.push(".out");
            PathBuf::from(path)
        })
    }
}

/// Parses the input and writes either the tree or the diagnostic to the
/// output, so a failed run never leaves an earlier tree behind. Returns
/// whether the input parsed.
fn run(args: &Args) -> anyhow::Result<bool> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let config = ParserConfig::new().with_max_depth(args.max_depth);

    let (report, parsed) = match parse_with_config(&source, args.start, &config) {
        Ok(tree) => (format!("{}\n", tree.render()), true),
        Err(error) => {
            if let ErrorTip::Suggestion(tip) = error.get_tip() {
                eprintln!("tip: {}", tip);
            }
            (format_error(&error, &source), false)
        }
    };

    if args.stdout {
        print!("{}", report);
        return Ok(parsed);
    }

    let output = args.output_path();
    fs::write(&output, report).with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("wrote {}", output.display());

    Ok(parsed)
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    if run(&Args::parse())? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
