use std::path::PathBuf;

use crate::config::RASTERIZER_HINT;
use crate::error::{IconError, Result};

/// First existing regular file among `candidates`, then `program` on `PATH`.
pub fn find_rasterizer(candidates: &[PathBuf], program: &str) -> Result<PathBuf> {
    first_file(candidates, || which::which(program).ok())
        .inspect(|p| log::debug!("using {} at {}", program, p.display()))
        .ok_or_else(|| IconError::RasterizerNotFound {
            program: program.to_string(),
            hint: RASTERIZER_HINT,
        })
}

/// `lookup` only runs once every candidate has been rejected.
fn first_file(
    candidates: &[PathBuf],
    lookup: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    candidates
        .iter()
        .cloned()
        .chain(std::iter::once_with(lookup).flatten())
        .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;

    const NO_SUCH_TOOL: &str = "mkicns-test-no-such-rasterizer";

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing/rsvg-convert");
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        fs::write(&first, b"").unwrap();
        fs::write(&second, b"").unwrap();

        let found = find_rasterizer(&[missing, first.clone(), second], NO_SUCH_TOOL).unwrap();
        assert_eq!(found, first);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let as_dir = dir.path().join("rsvg-convert");
        fs::create_dir(&as_dir).unwrap();
        let real = dir.path().join("bin-rsvg");
        fs::write(&real, b"").unwrap();

        let found = find_rasterizer(&[as_dir, real.clone()], NO_SUCH_TOOL).unwrap();
        assert_eq!(found, real);
    }

    #[test]
    fn test_nothing_found_reports_remediation() {
        let err = find_rasterizer(&[PathBuf::from("/nonexistent/rsvg-convert")], NO_SUCH_TOOL)
            .unwrap_err();
        match err {
            IconError::RasterizerNotFound { program, hint } => {
                assert_eq!(program, NO_SUCH_TOOL);
                assert_eq!(hint, "brew install librsvg");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_falls_back_to_path_lookup() {
        // `sh` is on PATH on every unix host the tests run on.
        let found = find_rasterizer(&[], "sh").unwrap();
        assert!(found.is_file());
    }

    #[test]
    fn test_path_lookup_skipped_when_candidate_matches() {
        let dir = tempfile::tempdir().unwrap();
        let brew = dir.path().join("rsvg-convert");
        fs::write(&brew, b"").unwrap();
        let looked_up = Cell::new(false);

        let found = first_file(&[brew.clone()], || {
            looked_up.set(true);
            None
        });

        assert_eq!(found, Some(brew));
        assert!(!looked_up.get());
    }

    #[test]
    fn test_path_lookup_used_after_candidates_miss() {
        let dir = tempfile::tempdir().unwrap();
        let on_path = dir.path().join("rsvg-convert");
        fs::write(&on_path, b"").unwrap();

        let found = first_file(&[dir.path().join("missing")], || Some(on_path.clone()));
        assert_eq!(found, Some(on_path));
    }
}
