use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};
use std::path::PathBuf;

use rlp_codec::{render_hex, write_output, Config, ItemParser};
use rlp_codec::rlp::{self, Item};
use rlp_codec::types::Bytes;

#[derive(Parser)]
#[command(name = "rlp-codec")]
#[command(version, about = "Recursive Length Prefix encoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    
    /// Log level, overrides the configuration file
    #[arg(short, long, global = true)]
    log_level: Option<String>,
    
    /// Print hex without the 0x prefix
    #[arg(long, global = true)]
    no_prefix: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an item and print its hex encoding
    Encode {
        #[command(flatten)]
        item: ItemArgs,
        
        /// Write the encoding to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    
    /// Print the encoded length of an item
    Length {
        #[command(flatten)]
        item: ItemArgs,
    },
    
    /// Encode an item and compare it with an expected encoding
    Verify {
        #[command(flatten)]
        item: ItemArgs,
        
        /// Expected encoding as hex
        #[arg(short, long)]
        expected: String,
    },
}

#[derive(Args)]
struct ItemArgs {
    /// Item in JSON notation, e.g. '[1, "0x", []]'
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    item: Option<String>,
    
    /// Read the item's JSON notation from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl ItemArgs {
    fn load(&self, parser: &ItemParser) -> Result<Item> {
        let item = match (&self.item, &self.file) {
            (Some(text), _) => parser.parse_str(text).context("Failed to parse item")?,
            (None, Some(path)) => parser
                .parse_file(path)
                .with_context(|| format!("Failed to parse item from {}", path.display()))?,
            (None, None) => anyhow::bail!("No item given"),
        };
        Ok(item)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    if cli.no_prefix {
        config.output.prefix = false;
    }
    
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
    
    let parser = ItemParser::new(&config.input);
    
    match cli.command {
        Commands::Encode { item, output } => {
            let item = item.load(&parser)?;
            let encoded = rlp::encode(&item);
            info!(kind = item.kind(), len = encoded.len(), "Encoded item");
            
            match output {
                Some(path) => {
                    write_output(&path, &encoded, &config.output)?;
                    info!("Wrote encoding to {}", path.display());
                }
                None => println!("{}", render_hex(&encoded, &config.output)),
            }
        }
        
        Commands::Length { item } => {
            let item = item.load(&parser)?;
            println!("{}", rlp::length(&item));
        }
        
        Commands::Verify { item, expected } => {
            let item = item.load(&parser)?;
            let expected = Bytes::from_hex(&expected).context("Invalid expected encoding")?;
            let encoded = rlp::encode(&item);
            
            let matches = encoded == expected;
            println!("{}", matches);
            
            if !matches {
                warn!(
                    "Encoding mismatch: got {}, expected {}",
                    render_hex(&encoded, &config.output),
                    render_hex(&expected, &config.output),
                );
                std::process::exit(1);
            }
        }
    }
    
    Ok(())
}
