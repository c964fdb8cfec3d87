//! Typed keywords example — loads a schema's keywords and converts ad-hoc values.
//!
//! Run with:
//!   cargo run --example typed-keywords

use schematype::{DataType, KeywordCatalog, RawNode, SchemaLoader};

const SCHEMA: &str = r#"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "title": "Listener",
    "type": ["integer", "null"],
    "minimum": 1,
    "maximum": 65535,
    "x-ports": [80, 443]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = KeywordCatalog::standard().clone();
    catalog.extend_from_json(r#"{"x-ports": "integer_array"}"#)?;

    let loaded = SchemaLoader::new(&catalog).load_str(SCHEMA)?;
    for (keyword, value) in loaded.iter() {
        println!("{keyword:<10} {:<14} {value}", value.data_type());
    }

    // A bare scalar is accepted wherever an array type is declared.
    let required = DataType::StringArray.convert(&RawNode::from("id"))?;
    println!("required   {:<14} {required}", required.data_type());

    match DataType::Integer.convert(&RawNode::from(true)) {
        Ok(value) => println!("unexpected: {value}"),
        Err(err) => eprintln!("rejected: {err}"),
    }

    Ok(())
}
