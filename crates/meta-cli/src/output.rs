use meta_core::responses::GraphqlErrorResponse;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a GraphQL error body on stdout and fail the command.
///
/// The body is what an API client would receive; the returned error makes
/// the process exit non-zero.
pub fn reject(body: &GraphqlErrorResponse, format: OutputFormat) -> anyhow::Result<()> {
    output(body, format)?;
    let first = body
        .errors
        .first()
        .map_or("request rejected", |error| error.message.as_str());
    anyhow::bail!("{first}")
}
