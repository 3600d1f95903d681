//! reqscan CLI - formatting requirement extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use reqscan::context::zone_tags;
use reqscan::render::{self, to_text_with_options};
use reqscan::{
    ExtractOptions, Extraction, Extractor, FragmentClassifier, JsonFormat, KeywordClassifier,
    RequirementsModel, SegmentOptions, SourceRegistry, TextOptions,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "reqscan")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract document-formatting requirements from regulatory text", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input files (txt, md; pdf and docx when built with those features)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    extract: ExtractArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Clone, Debug, Default)]
struct ExtractArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Print a human-readable summary instead of JSON
    #[arg(long)]
    text: bool,

    /// Include evidence in the text summary
    #[arg(long, requires = "text")]
    evidence: bool,

    /// Pre-filter fragments with the keyword classifier
    #[arg(long)]
    classify: bool,

    /// Emit the extraction report alongside the model
    #[arg(long)]
    report: bool,

    /// Do not split fragments on spaced dashes
    #[arg(long)]
    no_dash_split: bool,

    /// Discard fragments longer than this many characters
    #[arg(long, value_name = "N", env = "REQSCAN_MAX_FRAGMENT_CHARS")]
    max_fragment_chars: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract requirements from one or more files
    Extract {
        /// Input files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        args: ExtractArgs,
    },

    /// Show how a file is segmented into fragments
    Fragments {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show keyword classifier labels
        #[arg(long)]
        classify: bool,

        /// Do not split fragments on spaced dashes
        #[arg(long)]
        no_dash_split: bool,
    },

    /// Print the model holding only default values
    Defaults {
        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract { inputs, args }) => cmd_extract(&inputs, &args),
        Some(Commands::Fragments {
            input,
            classify,
            no_dash_split,
        }) => cmd_fragments(&input, classify, no_dash_split),
        Some(Commands::Defaults { compact }) => cmd_defaults(compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if inputs are provided
            if cli.inputs.is_empty() {
                println!("{}", "Usage: reqscan <FILE>... [-o OUTPUT]".yellow());
                println!("       reqscan --help for more information");
                Ok(())
            } else {
                cmd_extract(&cli.inputs, &cli.extract)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(args: &ExtractArgs) -> ExtractOptions {
    let mut segment = SegmentOptions::new().with_dash_split(!args.no_dash_split);
    if let Some(chars) = args.max_fragment_chars {
        segment = segment.with_max_fragment_chars(chars);
    }
    ExtractOptions::new().with_segment(segment)
}

fn build_extractor(args: &ExtractArgs) -> Extractor {
    let extractor = Extractor::new().with_options(build_options(args));
    if args.classify {
        extractor.with_classifier(Arc::new(KeywordClassifier::new()))
    } else {
        extractor
    }
}

fn extract_one(registry: &SourceRegistry, extractor: &Extractor, path: &Path) -> CliResult<Extraction> {
    let text = registry.read(path)?;
    Ok(extractor.extract(&text)?)
}

fn cmd_extract(inputs: &[PathBuf], args: &ExtractArgs) -> CliResult<()> {
    let extractor = build_extractor(args);
    extractor.options().validate()?;
    let registry = SourceRegistry::with_defaults();
    log::debug!(
        "Extracting {} file(s) with {:?}; sources: {:?}",
        inputs.len(),
        extractor,
        registry.supported_extensions()
    );

    let pb = if inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let results: Vec<(PathBuf, CliResult<Extraction>)> = inputs
        .par_iter()
        .map(|path| {
            let result = extract_one(&registry, &extractor, path);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            (path.clone(), result)
        })
        .collect();

    if let Some(pb) = &pb {
        pb.finish_with_message("Done!");
    }

    let mut failed = 0usize;
    let mut done = Vec::with_capacity(results.len());
    for (path, result) in results {
        match result {
            Ok(extraction) => {
                if extraction.report.was_truncated() {
                    eprintln!(
                        "{} {} was truncated by the input limits",
                        "Warning:".yellow(),
                        path.display()
                    );
                }
                done.push((path, extraction));
            }
            Err(e) => {
                eprintln!("{} {}: {}", "Failed".red(), path.display(), e);
                failed += 1;
            }
        }
    }

    if !done.is_empty() {
        let rendered = render_extractions(&done, args)?;
        write_output(args.output.as_deref(), &rendered)?;
    }

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn render_extractions(done: &[(PathBuf, Extraction)], args: &ExtractArgs) -> CliResult<String> {
    if args.text {
        let options = TextOptions::new().with_evidence(args.evidence);
        let sections: Vec<String> = done
            .iter()
            .map(|(path, extraction)| {
                let body = to_text_with_options(&extraction.model, &options);
                if done.len() > 1 {
                    format!("== {}\n{}", path.display(), body)
                } else {
                    body
                }
            })
            .collect();
        return Ok(sections.join("\n\n"));
    }

    let format = if args.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let with_report = args.report || args.classify;

    let entry = |extraction: &Extraction| -> CliResult<serde_json::Value> {
        Ok(if with_report {
            serde_json::to_value(extraction)?
        } else {
            serde_json::to_value(&extraction.model)?
        })
    };

    if let [(_, extraction)] = done {
        return Ok(if with_report {
            render::to_json(extraction, format)?
        } else {
            render::to_json(&extraction.model, format)?
        });
    }

    let items = done
        .iter()
        .map(|(path, extraction)| {
            Ok(serde_json::json!({
                "file": path.display().to_string(),
                "result": entry(extraction)?,
            }))
        })
        .collect::<CliResult<Vec<_>>>()?;

    Ok(render::to_json(&serde_json::Value::Array(items), format)?)
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_fragments(input: &Path, classify: bool, no_dash_split: bool) -> CliResult<()> {
    let args = ExtractArgs {
        no_dash_split,
        ..ExtractArgs::default()
    };
    let extractor = build_extractor(&args);
    let text = SourceRegistry::with_defaults().read(input)?;
    let fragments = extractor.fragments(&text)?;

    let labels = if classify {
        Some(KeywordClassifier::new().classify(&fragments)?)
    } else {
        None
    };

    println!("{}", "Fragments".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (i, fragment) in fragments.iter().enumerate() {
        let tags = zone_tags(fragment);
        let mut line = format!("{:>4}  {}", i + 1, fragment);
        if !tags.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", tags.join(", ")).dimmed()));
        }
        if let Some(label) = labels.as_ref().and_then(|l| l.get(i)) {
            line.push_str(&format!(
                " {}",
                format!("<{} {:.2}>", label.label, label.score).yellow()
            ));
        }
        println!("{}", line);
    }

    println!();
    println!("{}: {}", "Total".bold(), fragments.len());
    Ok(())
}

fn cmd_defaults(compact: bool) -> CliResult<()> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", render::to_json(&RequirementsModel::default(), format)?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "reqscan".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Formatting requirement extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/reqscan".dimmed());
    println!("License: MIT");
}
