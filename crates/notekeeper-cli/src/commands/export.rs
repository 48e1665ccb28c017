use std::path::Path;

use notekeeper_core::App;

use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_export(output_path: Option<&Path>, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let app = App::new(&store);
    let document = app.repository().load()?;
    let rendered = serde_json::to_string_pretty(&document)?;

    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
