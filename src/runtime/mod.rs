use std::env;
use std::path::Path;

use crate::library::scan;
use crate::logging::init_logging;

mod report;
mod settings;
mod startup;

/// Scan a directory into a fresh session and print the seeded playlist.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, warning) = settings::load_settings();
    init_logging(&settings.logging.filter);
    if let Some(msg) = warning {
        tracing::warn!("{msg}");
    }

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let tracks = scan(Path::new(&dir), &settings.library);
    tracing::info!(dir = %dir, tracks = tracks.len(), "library scanned");

    let session = startup::seed_session(tracks, settings);

    let mut out = std::io::stdout().lock();
    report::write_report(&mut out, &session)?;
    Ok(())
}
