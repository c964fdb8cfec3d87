use crate::cmd::{resolve_catalog, KeywordsArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_keywords, OutputFormat};

pub fn run(args: KeywordsArgs, format: OutputFormat) -> CliResult<i32> {
    let catalog = resolve_catalog(args.catalog.as_deref(), args.only)?;
    tracing::debug!(keywords = catalog.len(), "resolved keyword catalog");
    print_keywords(&catalog, format);
    Ok(SUCCESS)
}
