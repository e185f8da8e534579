//! Prefix Trie - command-line driver.
//!
//! Loads a word list into a trie and answers lookups, prefix checks,
//! completions and deletions against it. Configuration is layered from
//! defaults, an optional file and `TRIE__*` environment variables.

use clap::{Parser, Subcommand};
use prefix_trie_lib::config::{ConfigLoader, LogConfig, ToolConfig, ENV_PREFIX};
use prefix_trie_lib::data_structures::Trie;
use prefix_trie_lib::dictionary::Dictionary;
use prefix_trie_lib::error::{
    ErrorContext, ErrorReporter, TracingErrorReporter, TrieToolError, TrieToolResult,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the prefix trie driver.
#[derive(Parser, Debug)]
#[clap(name = "prefix_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, one word per line (overrides dictionary.path)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a word is stored
    Contains {
        /// Word to look up
        word: String,
    },

    /// Check whether any stored word starts with a prefix
    Prefix {
        /// Prefix to look up
        prefix: String,
    },

    /// List every stored word starting with a prefix
    Complete {
        /// Prefix to complete (empty lists every word)
        #[clap(default_value = "")]
        prefix: String,

        /// Print the words as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Delete words, then optionally list the completions of a prefix
    Delete {
        /// Words to delete
        #[clap(required = true)]
        words: Vec<String>,

        /// Prefix to complete after deleting
        #[clap(long)]
        then_complete: Option<String>,
    },

    /// Walk through deleting a word that prefixes another
    Demo,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> TrieToolResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        TrieToolError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Report a fatal error and exit.
fn fail(error: TrieToolError, component: &str) -> ! {
    TracingErrorReporter.report(ErrorContext::new(error, component));
    process::exit(1);
}

/// Sorted completions, for stable presentation.
fn completions(trie: &Trie, prefix: &str) -> Vec<String> {
    let mut words = trie.words_with_prefix_lossy(prefix);
    words.sort_unstable();
    words
}

/// Load the word list named on the command line or in the configuration.
fn load_words(words: Option<PathBuf>, config: &ToolConfig) -> TrieToolResult<Trie> {
    let path = words
        .or_else(|| config.dictionary.path.clone())
        .ok_or_else(|| {
            TrieToolError::Custom(
                "No word list given: pass --words or set dictionary.path".to_string(),
            )
        })?;

    let trie = Dictionary::new(config.dictionary.clone()).from_path(&path)?;
    info!(words = trie.len(), path = %path.display(), "Word list loaded");
    Ok(trie)
}

fn run_demo() {
    let mut trie = Trie::new();
    trie.insert("cap");
    trie.insert("captain");

    println!("Before deleting the word `cap`: {:?}", completions(&trie, "cap"));
    trie.delete("cap");
    println!("After deleting the word `cap`: {:?}", completions(&trie, "cap"));
    println!(
        "contains(\"cap\") = {}, contains_prefix(\"cap\") = {}",
        trie.contains("cap"),
        trie.contains_prefix("cap")
    );
}

fn run(command: Command, words: Option<PathBuf>, config: &ToolConfig) -> TrieToolResult<()> {
    match command {
        Command::Contains { word } => {
            let trie = load_words(words, config)?;
            println!("{}", trie.contains(&word));
        }
        Command::Prefix { prefix } => {
            let trie = load_words(words, config)?;
            println!("{}", trie.contains_prefix(&prefix));
        }
        Command::Complete { prefix, json } => {
            let trie = load_words(words, config)?;
            let found = completions(&trie, &prefix);
            if json {
                println!("{}", serde_json::to_string(&found)?);
            } else {
                for word in found {
                    println!("{word}");
                }
            }
        }
        Command::Delete {
            words: targets,
            then_complete,
        } => {
            let mut trie = load_words(words, config)?;
            for target in &targets {
                let removed = trie.delete(target);
                info!(word = %target, removed, "Delete applied");
            }
            if let Some(prefix) = then_complete {
                for word in completions(&trie, &prefix) {
                    println!("{word}");
                }
            }
        }
        Command::Demo => run_demo(),
        Command::Validate => info!("Configuration validated successfully"),
        Command::GenConfig { output } => gen_config(&output)?,
    }

    Ok(())
}

/// Write the default configuration as TOML.
fn gen_config(output: &Path) -> TrieToolResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&ToolConfig::default())
        .map_err(|e| TrieToolError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Generating a config must not depend on the current one being valid.
    let loaded = match args.command {
        Command::GenConfig { .. } => Ok(ToolConfig::default()),
        _ => ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load(),
    };

    let log = match &loaded {
        Ok(config) => config.log.clone(),
        Err(_) => LogConfig::default(),
    };
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        process::exit(1);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => fail(e.into(), "config"),
    };

    if let Err(e) = run(args.command, args.words, &config) {
        fail(e, "cli");
    }
}
