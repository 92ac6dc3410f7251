use super::{CallToolResult, Content, JsonRpcError};
use headmoji_core::{Direction, HeadingPrefixer};
use serde::Deserialize;

pub fn handle_prefix(
    arguments: Option<serde_json::Value>,
    direction: Direction,
    prefixer: &HeadingPrefixer,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct PrefixArgs {
        text: String,
    }

    let args: PrefixArgs = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid arguments: {e}"),
            data: None,
        })?;

    let output = prefixer.transform(&args.text, direction);

    log::info!(
        "{:?}: {} of {} headings modified",
        direction,
        output.stats.modified(),
        output.stats.headings
    );

    let result = CallToolResult {
        content: vec![Content::Text {
            text: output.content,
        }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}
