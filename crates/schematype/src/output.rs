use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use schematype_keyword::{KeywordCatalog, LoadedSchema};
use schematype_value::{DataType, TypedValue};
use serde::Serialize;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct TypedValueOutput<'a> {
    schema_id: &'static str,
    data_type: DataType,
    kind: String,
    len: usize,
    value: &'a TypedValue,
    display: String,
}

#[derive(Serialize)]
struct KeywordValueOutput<'a> {
    keyword: &'a str,
    data_type: DataType,
    value: &'a TypedValue,
    display: String,
}

#[derive(Serialize)]
struct LoadedSchemaOutput<'a> {
    schema_id: &'static str,
    keywords: Vec<KeywordValueOutput<'a>>,
    skipped: &'a [String],
}

#[derive(Serialize)]
struct BindingOutput<'a> {
    name: &'a str,
    data_type: DataType,
    kind: String,
}

#[derive(Serialize)]
struct BindingListOutput<'a> {
    schema_id: &'static str,
    bindings: Vec<BindingOutput<'a>>,
}

pub fn print_typed_value(value: &TypedValue, format: OutputFormat) {
    let data_type = value.data_type();
    match format {
        OutputFormat::Json => {
            let out = TypedValueOutput {
                schema_id: "https://schemas.3leaps.dev/schematype/cli/v1/typed-value.schema.json",
                data_type,
                kind: data_type.kind().to_string(),
                len: value.len(),
                value,
                display: value.to_string(),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let table = render_table(
                vec!["DATA TYPE", "KIND", "LEN", "VALUE"],
                vec![vec![
                    data_type.to_string(),
                    data_type.kind().to_string(),
                    value.len().to_string(),
                    value.to_string(),
                ]],
            );
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "data_type={} kind={} len={} value={}",
                data_type,
                data_type.kind(),
                value.len(),
                value
            );
        }
        OutputFormat::Raw => println!("{value}"),
    }
}

pub fn print_loaded_schema(loaded: &LoadedSchema, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = LoadedSchemaOutput {
                schema_id: "https://schemas.3leaps.dev/schematype/cli/v1/loaded-schema.schema.json",
                keywords: loaded
                    .iter()
                    .map(|(keyword, value)| KeywordValueOutput {
                        keyword,
                        data_type: value.data_type(),
                        value,
                        display: value.to_string(),
                    })
                    .collect(),
                skipped: loaded.skipped(),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let rows = loaded
                .iter()
                .map(|(keyword, value)| {
                    vec![
                        keyword.to_string(),
                        value.data_type().to_string(),
                        value.to_string(),
                    ]
                })
                .collect();
            println!("{}", render_table(vec!["KEYWORD", "DATA TYPE", "VALUE"], rows));
            if !loaded.skipped().is_empty() {
                println!("skipped: {}", loaded.skipped().join(", "));
            }
        }
        OutputFormat::Pretty => {
            for (keyword, value) in loaded.iter() {
                println!("{keyword} ({}) = {value}", value.data_type());
            }
            for keyword in loaded.skipped() {
                println!("{keyword} (skipped)");
            }
        }
        OutputFormat::Raw => {
            for (keyword, value) in loaded.iter() {
                println!("{keyword}\t{value}");
            }
        }
    }
}

pub fn print_keywords(catalog: &KeywordCatalog, format: OutputFormat) {
    let bindings = catalog
        .iter()
        .map(|keyword| BindingOutput {
            name: keyword.name(),
            data_type: keyword.data_type(),
            kind: keyword.data_type().kind().to_string(),
        })
        .collect();
    print_bindings(
        BindingListOutput {
            schema_id: "https://schemas.3leaps.dev/schematype/cli/v1/keywords.schema.json",
            bindings,
        },
        "KEYWORD",
        format,
    );
}

pub fn print_data_types(format: OutputFormat) {
    let bindings = DataType::ALL
        .iter()
        .map(|data_type| BindingOutput {
            name: data_type.name(),
            data_type: *data_type,
            kind: data_type.kind().to_string(),
        })
        .collect();
    print_bindings(
        BindingListOutput {
            schema_id: "https://schemas.3leaps.dev/schematype/cli/v1/data-types.schema.json",
            bindings,
        },
        "NAME",
        format,
    );
}

fn print_bindings(out: BindingListOutput<'_>, name_header: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            let rows = out
                .bindings
                .iter()
                .map(|b| vec![b.name.to_string(), b.data_type.to_string(), b.kind.clone()])
                .collect();
            println!(
                "{}",
                render_table(vec![name_header, "DATA TYPE", "KIND"], rows)
            );
        }
        OutputFormat::Pretty => {
            for b in &out.bindings {
                println!("{:<20} {:<14} {}", b.name, b.data_type.name(), b.kind);
            }
        }
        OutputFormat::Raw => {
            for b in &out.bindings {
                println!("{}\t{}", b.name, b.data_type);
            }
        }
    }
}

fn render_table(header: Vec<&str>, rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    for row in rows {
        table.add_row(row);
    }
    table
}

fn print_json<T: Serialize>(out: &T) {
    println!(
        "{}",
        serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
    );
}

#[cfg(test)]
mod tests {
    use schematype_value::RawNode;

    use super::*;

    #[test]
    fn typed_value_json_has_schema_id_and_value() {
        let value = DataType::NumberArray
            .convert(&RawNode::parse("[1, 2.5]").unwrap())
            .unwrap();
        let out = TypedValueOutput {
            schema_id: "x",
            data_type: value.data_type(),
            kind: value.kind().to_string(),
            len: value.len(),
            value: &value,
            display: value.to_string(),
        };

        let json = serde_json::to_string(&out).expect("typed value output should serialize");
        assert!(json.contains("\"schema_id\""));
        assert!(json.contains("\"data_type\":\"number_array\""));
        assert!(json.contains("\"kind\":\"[number]\""));
        assert!(json.contains("\"value\":[1.0,2.5]"));
        assert!(json.contains("\"display\":\"1.0,2.5\""));
    }

    #[test]
    fn table_has_one_row_per_entry() {
        let table = render_table(
            vec!["A", "B"],
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
            ],
        );
        assert_eq!(table.row_iter().count(), 2);
    }
}
