use anyhow::{Context, Result};
use clap::Parser;
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{SiteOptions, build_site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a directory of markdown files")]
struct Cli {
    /// URL prefix the site is served from (e.g. /my-repo/)
    base_path: Option<String>,

    /// Config file (defaults to ./markdown-sitegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory, replaced on every build
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML page template
    #[arg(short, long)]
    template: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over the config file, which wins over defaults.
    fn resolve(self) -> Result<Config> {
        let config_path = self.config.clone().unwrap_or_else(Config::config_path);
        log::info!("Config path: {}", config_path.display());

        let mut config = match Config::load_from_path(&config_path)? {
            Some(config) => config,
            None if self.config.is_some() => {
                anyhow::bail!("Config file not found: {}", config_path.display())
            }
            None => {
                log::info!("No config file found, using defaults");
                Config::default()
            }
        };

        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Cli::parse().resolve()?;
    let options = SiteOptions {
        content_dir: config.content_dir.clone(),
        static_dir: config.static_dir.clone(),
        output_dir: config.output_dir.clone(),
        template_path: config.template_path.clone(),
        base_path: config.normalized_base_path(),
    };
    log::info!("Building site with base path {}", options.base_path);

    let summary = build_site(&options).with_context(|| {
        format!(
            "Failed to build site from {} into {}",
            options.content_dir.display(),
            options.output_dir.display()
        )
    })?;

    println!(
        "Generated {} pages into {}",
        summary.pages.len(),
        options.output_dir.display()
    );
    Ok(())
}
