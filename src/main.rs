use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use article_structurer::{process, render, run, ArticleInput, Error, Settings, StructuredArticle};

#[derive(Parser)]
#[command(name = "article_structurer", about = "Structure biographical prose into infobox, lead and sections")]
struct Cli {
    /// TOML settings file (overridden by STRUCTURER_* env vars)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Structure one plain-text document
    Structure {
        /// Article title (becomes the infobox name)
        #[arg(short, long)]
        title: String,
        /// Text file to read (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Infobox template name
        #[arg(long)]
        template: Option<String>,
        /// Skip wiki markup rendering
        #[arg(long)]
        no_wikitext: bool,
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Process one JSON request payload ({title, text, options})
    Request {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Process JSON Lines of request payloads in parallel
    Batch {
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a structured article JSON into wiki markup
    Render {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Wikitext,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_level.as_str().into()),
        )
        .init();
    debug!(?settings, "settings loaded");

    match cli.command {
        Commands::Structure {
            title,
            input,
            template,
            no_wikitext,
            format,
        } => {
            let text = read_input(input.as_deref())?;
            let template = template.unwrap_or_else(|| settings.template.clone());
            let generate = should_render(format, no_wikitext, settings.generate_wikitext);
            let article = run(&title, &text, &template, generate);
            match format {
                Format::Json => print_json(&article)?,
                Format::Wikitext => print!("{}", article.wikitext.unwrap_or_default()),
            }
        }
        Commands::Request { input } => {
            let raw = read_input(input.as_deref())?;
            let request = ArticleInput::from_json(raw.trim(), 0)?;
            request.validate()?;
            print_json(&process(&request))?;
        }
        Commands::Batch { input, output } => {
            let raw = read_input(input.as_deref())?;
            let requests = parse_json_lines(&raw)?;
            if requests.is_empty() {
                eprintln!("No requests in input.");
                return Ok(());
            }
            let t0 = Instant::now();
            let counts = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    process_batch(&requests, settings.chunk_size(), BufWriter::new(file))?
                }
                None => process_batch(&requests, settings.chunk_size(), BufWriter::new(io::stdout().lock()))?,
            };
            info!(
                articles = counts.articles,
                sections = counts.sections,
                rendered = counts.rendered,
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "batch done"
            );
            counts.print();
        }
        Commands::Render { input } => {
            let raw = read_input(input.as_deref())?;
            let article: StructuredArticle = serde_json::from_str(raw.trim())
                .map_err(|source| Error::Json { line: 0, source })?;
            print!("{}", render(&article));
        }
    }

    Ok(())
}

/// Markup output always renders; otherwise the flag overrides the configured default.
fn should_render(format: Format, no_wikitext: bool, configured: bool) -> bool {
    matches!(format, Format::Wikitext) || (configured && !no_wikitext)
}

fn read_input(path: Option<&Path>) -> article_structurer::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|source| Error::Io {
            path: p.to_path_buf(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(buf)
        }
    }
}

/// One `ArticleInput` per non-blank line; the first bad line aborts with its number.
fn parse_json_lines(raw: &str) -> article_structurer::Result<Vec<ArticleInput>> {
    raw.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            let input = ArticleInput::from_json(l, i + 1)?;
            input.validate()?;
            Ok(input)
        })
        .collect()
}

fn print_json(article: &StructuredArticle) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(article)?);
    Ok(())
}

struct BatchCounts {
    articles: usize,
    sections: usize,
    rendered: usize,
}

impl BatchCounts {
    fn print(&self) {
        eprintln!(
            "Structured {} articles, {} sections, {} rendered.",
            self.articles, self.sections, self.rendered,
        );
    }
}

fn process_batch<W: Write>(
    requests: &[ArticleInput],
    chunk_size: usize,
    mut out: W,
) -> anyhow::Result<BatchCounts> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(requests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = BatchCounts {
        articles: 0,
        sections: 0,
        rendered: 0,
    };

    for chunk in requests.chunks(chunk_size) {
        // par_iter + collect keeps input order
        let articles: Vec<StructuredArticle> = chunk.par_iter().map(process).collect();
        for article in &articles {
            counts.articles += 1;
            counts.sections += article.sections.len();
            counts.rendered += usize::from(article.wikitext.is_some());
            serde_json::to_writer(&mut out, article)?;
            out.write_all(b"\n")?;
        }
        pb.inc(chunk.len() as u64);
    }

    out.flush()?;
    pb.finish_and_clear();
    Ok(counts)
}

// ── Tests ──
