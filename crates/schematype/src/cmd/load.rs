use schematype_keyword::{LoaderConfig, SchemaLoader};

use crate::cmd::{read_input, resolve_catalog, LoadArgs};
use crate::exit::{keyword_error, CliResult, SUCCESS};
use crate::output::{print_loaded_schema, OutputFormat};

pub fn run(args: LoadArgs, format: OutputFormat) -> CliResult<i32> {
    let catalog = resolve_catalog(args.catalog.as_deref(), args.only)?;
    let source = read_input(&args.path)?;

    let config = LoaderConfig {
        fail_on_unknown_keyword: args.strict,
        collect_errors: args.all_errors,
        ..LoaderConfig::default()
    };
    let loaded = SchemaLoader::with_config(&catalog, config)
        .load_str(&source)
        .map_err(|err| keyword_error(&format!("{} rejected", args.path.display()), err))?;

    tracing::info!(
        path = %args.path.display(),
        keywords = loaded.len(),
        skipped = loaded.skipped().len(),
        "schema loaded"
    );
    print_loaded_schema(&loaded, format);
    Ok(SUCCESS)
}
