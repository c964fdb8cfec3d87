use schematype_value::{DataType, RawNode};

use crate::cmd::{read_input, ConvertArgs};
use crate::exit::{value_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_typed_value, OutputFormat};

pub fn run(args: ConvertArgs, format: OutputFormat) -> CliResult<i32> {
    let data_type = DataType::from_name(&args.data_type)
        .map_err(|err| value_error("invalid --type", err))?;

    let source = match (&args.json, &args.file) {
        (Some(json), None) => json.clone(),
        (None, Some(path)) => read_input(path)?,
        _ => return Err(CliError::new(USAGE, "exactly one of --json or --file is required")),
    };

    let raw = RawNode::parse(&source).map_err(|err| value_error("invalid input", err))?;
    let value = data_type
        .convert(&raw)
        .map_err(|err| value_error("conversion failed", err))?;

    tracing::debug!(data_type = %data_type, len = value.len(), "converted value");
    print_typed_value(&value, format);
    Ok(SUCCESS)
}
