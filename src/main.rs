use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use meta_descriptor::config::MetaConfig;
use meta_descriptor::logging::init_logger;
use meta_descriptor::meta::MetaResolver;
use meta_descriptor::meta::loaders::ClasspathLoader;

#[derive(Parser)]
#[command(name = "meta-descriptor")]
#[command(version, about = "Resolve service and framework versions from classpath resources")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the descriptor for a service
    Describe {
        /// Name of the service being described
        service_name: String,

        /// Classpath entries (directories or jars); defaults to $CLASSPATH
        #[arg(short, long)]
        classpath: Vec<String>,

        /// JSON file overriding resource names
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.log_json);

    match cli.command {
        Command::Describe {
            service_name,
            classpath,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => MetaConfig::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => MetaConfig::default(),
            };

            let loader = if classpath.is_empty() {
                ClasspathLoader::from_env()
            } else {
                ClasspathLoader::from_path_lists(&classpath)
            };

            let meta = MetaResolver::new(config).resolve(&service_name, &loader);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&meta).context("serializing descriptor")?
                );
            } else {
                println!("{}", meta);
            }

            Ok(())
        }
    }
}
