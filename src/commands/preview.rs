//! Preview subcommand handler

use anyhow::Result;

use folio::cli::PreviewArgs;
use folio::portfolio::store::load_document;
use folio::preview::{run_preview, PreviewOptions};
use folio::Config;

/// Run the terminal preview. No log subscriber is installed so output does
/// not tear the alternate screen.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PreviewArgs) -> Result<()> {
    let config = Config::load()?;
    let data_path = args.data.or_else(|| config.server.data_path.clone());
    let data = load_document(data_path.as_deref());

    let options = PreviewOptions {
        seed: args.seed,
        no_typos: args.no_typos,
    };
    run_preview(&data, &config, &options)
}
