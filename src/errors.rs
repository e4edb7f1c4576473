use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Errors surfaced by loading and solving.
///
/// Not finding a solution is *not* an error: `Solver::solve` reports that as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("cannot read \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("time budget of {:.1}s exceeded", .limit.as_secs_f64())]
    TimeBudgetExceeded { limit: Duration },
}

impl SolveError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SolveError::Io { path: path.into(), source }
    }
}

impl From<SolveError> for io::Error {
    fn from(e: SolveError) -> Self {
        match e {
            SolveError::Io { source, .. } => source,
            // String version is the least fragile (no Send/Sync bounds issues)
            other => io::Error::new(io::ErrorKind::TimedOut, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = SolveError::io("missing.txt", io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert_eq!(e.to_string(), "cannot read \"missing.txt\": no such file");

        let e = SolveError::TimeBudgetExceeded { limit: Duration::from_millis(1500) };
        assert_eq!(e.to_string(), "time budget of 1.5s exceeded");
        assert_eq!(io::Error::from(e).kind(), io::ErrorKind::TimedOut);
    }
}
