//! Schema command: JSON Schema of the parse result.

use clap::Args;
use tracing::{debug, instrument};

use tweet_weight_core::ParsedResult;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema describing `parse --json` output.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    let schema = schemars::schema_for!(ParsedResult);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_lists_camel_case_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(ParsedResult)).unwrap();
        let properties = &schema["properties"];
        assert!(properties["weightedLength"].is_object());
        assert!(properties["validRangeEnd"].is_object());
        assert!(properties["displayRangeEnd"].is_object());
    }

    #[test]
    fn cmd_schema_succeeds() {
        assert!(cmd_schema(SchemaArgs::default()).is_ok());
    }
}
