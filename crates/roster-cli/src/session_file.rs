//! Loading and saving the working session from the JSON data file

use roster_core::rules::validate_session;
use roster_core::Session;
use std::path::Path;

/// Load the session stored at `path`
///
/// A missing file is an empty session. Links the loader had to skip are
/// reported on stderr; the session is still usable.
pub fn load(path: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    if !path.exists() {
        tracing::debug!(
            component = module_path!(),
            op = "load_session",
            path = %path.display(),
            "data file missing, starting empty"
        );
        return Ok(Session::new());
    }

    let (session, report) = roster_store::load_json_session(path)?;
    if !report.is_clean() {
        eprintln!(
            "warning: {} link(s) in {} could not be restored",
            report.dropped.len(),
            path.display()
        );
        for dropped in &report.dropped {
            eprintln!(
                "  {} {} -> {} {} ({:?})",
                dropped.from_kind, dropped.from_id, dropped.to_kind, dropped.to_id, dropped.reason
            );
        }
    }
    Ok(session)
}

/// Check the session's invariants and write it to `path`
pub fn save(path: &Path, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    validate_session(session)?;
    roster_store::save_json(path, &session.to_records())?;
    Ok(())
}
