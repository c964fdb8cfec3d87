use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use schematype_keyword::{read_document, KeywordCatalog, DEFAULT_MAX_FILE_SIZE};

use crate::exit::{keyword_error, CliResult};
use crate::output::OutputFormat;

pub mod convert;
pub mod keywords;
pub mod load;
pub mod types;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the supported data types.
    Types(TypesArgs),
    /// List keyword to data type bindings.
    Keywords(KeywordsArgs),
    /// Convert one JSON value through a data type.
    Convert(ConvertArgs),
    /// Load a schema's top-level keywords as typed values.
    Load(LoadArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Types(args) => types::run(args, format),
        Command::Keywords(args) => keywords::run(args, format),
        Command::Convert(args) => convert::run(args, format),
        Command::Load(args) => load::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug, Default)]
pub struct TypesArgs {}

#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Keyword catalog file (JSON object of keyword -> data type).
    #[arg(long, value_name = "FILE", env = "SCHEMATYPE_CATALOG")]
    pub catalog: Option<PathBuf>,
    /// Replace the standard keywords instead of extending them.
    #[arg(long, requires = "catalog")]
    pub only: bool,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Data type to convert through (e.g. integer, string_array).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub data_type: String,
    /// JSON value to convert.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub json: Option<String>,
    /// Read the JSON value from a file.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Schema file to load.
    pub path: PathBuf,
    /// Keyword catalog file (JSON object of keyword -> data type).
    #[arg(long, value_name = "FILE", env = "SCHEMATYPE_CATALOG")]
    pub catalog: Option<PathBuf>,
    /// Replace the standard keywords instead of extending them.
    #[arg(long, requires = "catalog")]
    pub only: bool,
    /// Fail on members that are not cataloged keywords.
    #[arg(long)]
    pub strict: bool,
    /// Report every rejected keyword instead of stopping at the first.
    #[arg(long)]
    pub all_errors: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Standard catalog, optionally extended (or replaced) by a catalog file.
pub(crate) fn resolve_catalog(path: Option<&Path>, only: bool) -> CliResult<KeywordCatalog> {
    let Some(path) = path else {
        return Ok(KeywordCatalog::standard().clone());
    };

    let custom =
        KeywordCatalog::from_file(path).map_err(|err| keyword_error("catalog load failed", err))?;
    if only {
        return Ok(custom);
    }

    let mut catalog = KeywordCatalog::standard().clone();
    catalog
        .extend(&custom)
        .map_err(|err| keyword_error("catalog merge failed", err))?;
    Ok(catalog)
}

pub(crate) fn read_input(path: &Path) -> CliResult<String> {
    read_document(path, DEFAULT_MAX_FILE_SIZE)
        .map_err(|err| keyword_error("read failed", err))
}
