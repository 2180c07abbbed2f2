use std::process::ExitCode;
use vocab_widget::{format_listing, load_entries, logger, MissingMeaning, WidgetConfig};

fn main() -> ExitCode {
    let config = WidgetConfig::from_env().with_missing_meaning(MissingMeaning::Placeholder);
    logger::init(&config.log_path);

    match load_entries(&config.list_path, config.missing_meaning) {
        Ok(entries) => {
            print!("{}", format_listing(&entries));
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger::log(&format!("list-words failed: {}", e));
            eprintln!("Could not read {}: {}", config.list_path.display(), e);
            ExitCode::FAILURE
        }
    }
}
