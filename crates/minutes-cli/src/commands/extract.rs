//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::read_input;
use crate::config::Config;
use crate::error::Result;
use minutes_extractor::{ExtractionRequest, Extractor};
use tracing::info;

/// Execute the extract command.
pub fn execute_extract(args: &ExtractArgs, config: &Config) -> Result<String> {
    let text = read_input(args.input.file.as_deref())?;

    let mut request = ExtractionRequest::new(text);
    if let Some(today) = args.input.today {
        request = request.with_reference_date(today);
    }

    let extractor = Extractor::new(config.extractor.clone());
    let result = extractor.extract(request);

    info!(
        "Found {} action items from {} lines",
        result.metadata.items_extracted, result.metadata.lines_scanned
    );

    let output = if args.metadata {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string_pretty(&result.items)?
    };
    Ok(output)
}
