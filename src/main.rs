use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use imgviz::notifier::Notifier;
use imgviz::sources::{JsonInput, Source};
use imgviz::{render, DockerSource, ImageNode, JsonSource, NerdctlSource, RenderOptions};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Engine {
    Docker,
    Nerdctl,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(help = "Image id prefix or name to start the tree or graph from (e.g., ubuntu:22.04)")]
    start: Option<String>,

    #[arg(short, long, help = "Show image information as tree")]
    tree: bool,

    #[arg(short, long, help = "Show image information as Graphviz dot")]
    dot: bool,

    #[arg(short, long, help = "Show short summary of images (repo name and list of tags)")]
    short: bool,

    #[arg(short = 'n', long = "no-trunc", help = "Don't truncate the image IDs")]
    no_trunc: bool,

    #[arg(
        short,
        long,
        help = "Display image size as incremental rather than cumulative"
    )]
    incremental: bool,

    #[arg(short = 'l', long = "only-labelled", help = "Print only labelled images")]
    only_labelled: bool,

    #[arg(
        short,
        long,
        value_enum,
        default_value = "docker",
        help = "Container engine to query"
    )]
    engine: Engine,

    #[arg(
        short = 'f',
        long,
        help = "Read a JSON image array from this file ('-' for stdin) instead of the engine"
    )]
    input: Option<PathBuf>,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Verbose mode (-v for info, -vv for debug, -vvv for trace)"
    )]
    verbose: u8,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tree: self.tree,
            dot: self.dot,
            short: self.short,
            no_trunc: self.no_trunc,
            incremental: self.incremental,
            only_labelled: self.only_labelled,
        }
    }

    /// Explicit `--input` wins; otherwise piped stdin is read, and only an interactive
    /// stdin falls through to the engine.
    fn json_input(&self) -> Option<JsonInput> {
        match &self.input {
            Some(path) if path.as_os_str() == "-" => Some(JsonInput::Stdin),
            Some(path) => Some(JsonInput::File(path.clone())),
            None if !std::io::stdin().is_terminal() => Some(JsonInput::Stdin),
            None => None,
        }
    }
}

fn list_images(cli: &Cli, notifier: &Notifier) -> Result<Vec<ImageNode>> {
    let images = match cli.json_input() {
        Some(input) => JsonSource::new(input).list_images(notifier)?,
        None => match cli.engine {
            Engine::Docker => {
                notifier.debug("Initializing Docker engine");
                DockerSource::new()?.list_images(notifier)?
            }
            Engine::Nerdctl => {
                notifier.debug("Initializing nerdctl engine");
                NerdctlSource::new()?.list_images(notifier)?
            }
        },
    };
    Ok(images)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let notifier = Notifier::new(cli.verbose);

    notifier.debug(&format!("Engine: {:?}", cli.engine));
    let options = cli.render_options();
    notifier.debug(&format!("Render options: {:?}", options));
    options.validate()?;

    let images = list_images(&cli, &notifier)?;
    notifier.finish();
    if images.is_empty() {
        notifier.warn("No images found");
    } else {
        notifier.debug(&format!("Loaded {} images", images.len()));
    }

    let output = render(images, cli.start.as_deref(), &options)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write output")?;

    Ok(())
}
