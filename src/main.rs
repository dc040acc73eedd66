use std::{fs, io::Write, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use term_ranker::{
    error::Result,
    render::{render_json, render_text, Renderer},
    scorer::Scorer,
    upload::{collect_uploads, handle_upload},
};
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Html,
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text files, or directories to scan for files
    #[arg(required_unless_present = "form")]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the upload form page and exit
    #[arg(long, default_value = "false")]
    form: bool,
}

fn run(args: &Args) -> Result<bool> {
    let renderer = Renderer::new()?;

    if args.form {
        write_output(args.output.as_ref(), &renderer.form()?)?;
        return Ok(true);
    }

    let scorer = Scorer::new()?;
    let mut rankings = Vec::new();
    let mut pages = Vec::new();
    let mut all_ok = true;

    for (path, upload) in collect_uploads(&args.paths) {
        match upload.and_then(|upload| handle_upload(&scorer, upload)) {
            Ok(ranking) => {
                match args.format {
                    Format::Html => pages.push(renderer.results(&ranking)?),
                    Format::Text => pages.push(render_text(&ranking)),
                    Format::Json => {}
                }
                rankings.push(ranking);
            }
            Err(e) => {
                let filename = path.display().to_string();
                tracing::error!(%filename, status = e.status(), "{}", e.detail());
                if let Format::Html = args.format {
                    pages.push(renderer.error(&filename, &e)?);
                }
                all_ok = false;
            }
        }
    }

    let output = match args.format {
        Format::Json => render_json(&rankings)? + "\n",
        Format::Html | Format::Text => pages.join("\n"),
    };

    write_output(args.output.as_ref(), &output)?;

    Ok(all_ok)
}

fn write_output(path: Option<&PathBuf>, output: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, output)?,
        None => std::io::stdout().lock().write_all(output.as_bytes())?,
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
