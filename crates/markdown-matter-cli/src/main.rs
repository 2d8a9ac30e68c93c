use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_matter_config::Config;
use markdown_matter_engine::{BlockParser, MarkdownParser, ParsedMarkdown, io};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Split markdown files into front matter and body.
#[derive(Debug, Parser)]
#[command(name = "markdown-matter", version, about)]
struct Args {
    /// Markdown file or directory. Falls back to `default_path` from the config.
    path: Option<PathBuf>,

    /// Print the body rendered as HTML instead of JSON
    #[arg(long)]
    html: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Config file to use instead of ~/.config/markdown-matter/config.toml
    #[arg(long, value_name = "FILE", env = "MARKDOWN_MATTER_CONFIG")]
    config: Option<PathBuf>,

    /// Marker unit that opens and closes front matter
    #[arg(long)]
    marker: Option<String>,

    /// Minimum marker units in the opening run
    #[arg(long, value_name = "N")]
    min_markers: Option<usize>,

    /// Save the effective settings to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let loaded = match &args.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let mut config = loaded
        .with_context(|| format!("loading config from {}", config_path(args).display()))?
        .unwrap_or_default();

    if let Some(marker) = &args.marker {
        config.marker = marker.clone();
    }
    if let Some(min_markers) = args.min_markers {
        config.min_markers = min_markers;
    }
    if args.compact {
        config.pretty = false;
    }
    Ok(config)
}

fn config_path(args: &Args) -> PathBuf {
    args.config.clone().unwrap_or_else(Config::config_path)
}

fn write_config(args: &Args, config: &Config) -> Result<String> {
    // Invalid options are never written.
    config.front_matter_options()?;
    match &args.config {
        Some(path) => config.save_to_path(path)?,
        None => config.save()?,
    }
    Ok(format!("wrote config to {}", config_path(args).display()))
}

fn build_parser(config: &Config) -> Result<MarkdownParser> {
    let options = config.front_matter_options()?;
    let parser = BlockParser::with_front_matter(options)
        .context("registering the front matter rule")?;
    Ok(MarkdownParser::new(parser))
}

fn read(path: &Path) -> Result<String> {
    io::read_file(path).with_context(|| format!("reading {}", path.display()))
}

fn render_file(parser: &MarkdownParser, path: &Path) -> Result<ParsedMarkdown> {
    Ok(parser.render(&read(path)?))
}

fn relative_key(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Renders every markdown file under `root`, keyed by path relative to it.
fn render_dir(parser: &MarkdownParser, root: &Path) -> Result<BTreeMap<String, ParsedMarkdown>> {
    let mut out = BTreeMap::new();
    for path in io::scan_markdown_files(root)? {
        out.insert(relative_key(root, &path), render_file(parser, &path)?);
    }
    Ok(out)
}

fn dir_to_json(docs: &BTreeMap<String, ParsedMarkdown>, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(docs)?
    } else {
        serde_json::to_string(docs)?
    };
    Ok(json)
}

fn run(args: &Args) -> Result<String> {
    let config = load_config(args)?;
    if args.write_config {
        return write_config(args, &config);
    }
    let parser = build_parser(&config)?;

    let Some(path) = args.path.clone().or_else(|| config.default_path.clone()) else {
        bail!(
            "no path given and no default_path in {}",
            config_path(args).display()
        );
    };
    log::info!("reading {}", path.display());

    match (path.is_dir(), args.html) {
        (true, true) => {
            let mut out = String::new();
            for file in io::scan_markdown_files(&path)? {
                out.push_str(&format!("<!-- {} -->\n", relative_key(&path, &file)));
                out.push_str(&parser.render_html(&read(&file)?));
            }
            Ok(out)
        }
        (true, false) => dir_to_json(&render_dir(&parser, &path)?, config.pretty),
        (false, true) => Ok(parser.render_html(&read(&path)?)),
        (false, false) => {
            let content = read(&path)?;
            let json = if config.pretty {
                parser.to_json(&content)?
            } else {
                parser.to_json_compact(&content)?
            };
            Ok(json)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let output = run(&args)?;
    println!("{}", output.trim_end());
    Ok(())
}
