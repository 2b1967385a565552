use std::io::{self, Write};

use crate::library::display_from_fields;
use crate::session::Session;

/// One display line per playlist entry, then a summary line.
pub fn write_report<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let display = &session.settings().display;
    for (i, track) in session.list_playlist().iter().enumerate() {
        let line = display_from_fields(track, &display.fields, &display.separator);
        writeln!(out, "{:>4}. {line}", i + 1)?;
    }

    let stats = session.stats();
    writeln!(
        out,
        "{} tracks, {} in playlist, {} rated",
        stats.tracks, stats.playlist_length, stats.ratings.total
    )?;
    Ok(())
}
