use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use searchkey::index::{
    prefixes_subkey, tag_field_metadata_subkey, tag_field_subkey, SearchPrefixes, SearchRecord,
    TagFieldIndexer, TagFieldMetadata,
};
use searchkey::output;
use searchkey::utils::AppConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "searchkey")]
#[command(about = "Build, encode and inspect search index subkeys")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the discriminator registry
    Registry,
    /// Build a subkey and print it as hex
    Key {
        #[command(subcommand)]
        kind: KeyKind,
    },
    /// Encode a record value and print it as hex
    Encode {
        #[command(subcommand)]
        kind: ValueKind,
    },
    /// Decode a hex key (and value) read from the store
    Decode {
        /// Subkey as hex
        key: String,

        /// Value as hex (empty if omitted)
        value: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the posting keys a document's tag field value produces
    Postings {
        /// Field name
        field: String,

        /// Document key
        doc: String,

        /// Raw field value
        value: String,

        #[command(flatten)]
        tag_opts: TagOpts,
    },
}

#[derive(Subcommand)]
enum KeyKind {
    /// Key of the prefix set
    Prefixes,
    /// Key of a tag field's metadata
    TagMeta { field: String },
    /// Key of a single tag posting
    Posting {
        field: String,
        tag: String,
        doc: String,
    },
}

#[derive(Subcommand)]
enum ValueKind {
    /// Prefix set value
    Prefixes {
        /// Key prefixes the index watches
        prefixes: Vec<String>,
    },
    /// Tag field metadata value
    TagMeta {
        #[command(flatten)]
        tag_opts: TagOpts,
    },
}

#[derive(clap::Args)]
struct TagOpts {
    /// Tag separator (single ASCII character)
    #[arg(short, long)]
    separator: Option<char>,

    /// Compare tags case-sensitively
    #[arg(short, long)]
    case_sensitive: bool,
}

impl TagOpts {
    fn metadata(&self, config: &AppConfig) -> Result<TagFieldMetadata> {
        let separator = match self.separator {
            Some(c) if c.is_ascii() => c as u8,
            Some(c) => bail!("separator must be a single ASCII character, got {:?}", c),
            None => config.separator_byte(),
        };
        Ok(TagFieldMetadata::new(
            separator,
            self.case_sensitive || config.default_case_sensitive,
        ))
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("SEARCHKEY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_hex(label: &str, input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim().trim_start_matches("0x");
    hex::decode(trimmed).with_context(|| format!("Invalid hex in {}: {:?}", label, input))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load()?;
    debug!(?config, "loaded config");
    let color = config.color && !cli.no_color;

    match cli.command {
        Commands::Registry => output::print_registry(),
        Commands::Key { kind } => {
            let key = match kind {
                KeyKind::Prefixes => prefixes_subkey(),
                KeyKind::TagMeta { field } => tag_field_metadata_subkey(field.as_bytes()),
                KeyKind::Posting { field, tag, doc } => {
                    tag_field_subkey(field.as_bytes(), tag.as_bytes(), doc.as_bytes())?
                }
            };
            println!("{}", hex::encode(key));
        }
        Commands::Encode { kind } => {
            let value = match kind {
                ValueKind::Prefixes { prefixes } => SearchPrefixes::new(&prefixes).to_bytes()?,
                ValueKind::TagMeta { tag_opts } => tag_opts.metadata(&config)?.to_bytes(),
            };
            println!("{}", hex::encode(value));
        }
        Commands::Decode { key, value, json } => {
            let key = parse_hex("key", &key)?;
            let value = match value {
                Some(v) => parse_hex("value", &v)?,
                None => Vec::new(),
            };

            let record = SearchRecord::decode(&key, &value).context("Failed to decode record")?;
            if json {
                println!("{}", output::record_json(&record)?);
            } else {
                output::print_record(&record, color)?;
            }
        }
        Commands::Postings {
            field,
            doc,
            value,
            tag_opts,
        } => {
            let indexer = TagFieldIndexer::new(field, tag_opts.metadata(&config)?);
            for key in indexer.postings(doc.as_bytes(), value.as_bytes())? {
                println!("{}", hex::encode(key));
            }
        }
    }

    Ok(())
}
