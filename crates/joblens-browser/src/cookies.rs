//! Cookie snapshot persistence.
//!
//! A fresh login writes the session's full cookie set to disk; the next
//! run restores it to skip re-authentication. The snapshot is plain JSON
//! so it stays inspectable when a login loop needs debugging.

use crate::error::CookieStoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One cookie with the attribute set the browser needs to restore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Expiry as seconds since the Unix epoch; meaningless when `session`
    pub expires: f64,
    pub secure: bool,
    pub http_only: bool,
    /// Session cookies carry no expiry and die with the browser
    pub session: bool,
}

/// The on-disk snapshot: the cookie set plus when it was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieSnapshot {
    pub saved_at: DateTime<Utc>,
    pub cookies: Vec<StoredCookie>,
}

/// File-backed store for a single cookie snapshot.
#[derive(Debug, Clone)]
pub struct CookieJar {
    path: PathBuf,
}

impl CookieJar {
    /// Create a jar backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot's file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted snapshot.
    ///
    /// A missing file is reported as [`CookieStoreError::NotFound`] so the
    /// caller can treat it as "no session yet" rather than a failure.
    pub fn load(&self) -> Result<CookieSnapshot, CookieStoreError> {
        if !self.path.exists() {
            return Err(CookieStoreError::NotFound {
                path: self.path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(&self.path)?;
        let snapshot: CookieSnapshot = serde_json::from_str(&contents)?;
        tracing::debug!(
            "Loaded {} cookies saved at {}",
            snapshot.cookies.len(),
            snapshot.saved_at
        );
        Ok(snapshot)
    }

    /// Persist a snapshot, overwriting any prior one.
    pub fn save(&self, cookies: &[StoredCookie]) -> Result<(), CookieStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let snapshot = CookieSnapshot {
            saved_at: Utc::now(),
            cookies: cookies.to_vec(),
        };
        let contents = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, contents)?;
        tracing::debug!(
            "Saved {} cookies to {}",
            snapshot.cookies.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_cookie() -> StoredCookie {
        StoredCookie {
            name: "li_at".to_string(),
            value: "AQEDA...".to_string(),
            domain: ".linkedin.com".to_string(),
            path: "/".to_string(),
            expires: 1_900_000_000.0,
            secure: true,
            http_only: true,
            session: false,
        }
    }

    #[test]
    fn test_round_trip_preserves_attributes() {
        let tmp = TempDir::new().expect("create temp dir");
        let jar = CookieJar::new(tmp.path().join("cookies.json"));

        let cookies = vec![
            sample_cookie(),
            StoredCookie {
                name: "bcookie".to_string(),
                value: "v=2".to_string(),
                domain: ".linkedin.com".to_string(),
                path: "/".to_string(),
                expires: -1.0,
                secure: false,
                http_only: false,
                session: true,
            },
        ];

        jar.save(&cookies).expect("save snapshot");
        let snapshot = jar.load().expect("load snapshot");

        assert_eq!(snapshot.cookies, cookies);
        assert!(snapshot.saved_at <= Utc::now());
    }

    #[test]
    fn test_missing_snapshot_is_not_found() {
        let tmp = TempDir::new().expect("create temp dir");
        let jar = CookieJar::new(tmp.path().join("absent.json"));

        let result = jar.load();
        assert!(matches!(result, Err(CookieStoreError::NotFound { .. })));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let tmp = TempDir::new().expect("create temp dir");
        let jar = CookieJar::new(tmp.path().join("nested/dir/cookies.json"));

        jar.save(&[sample_cookie()]).expect("save snapshot");
        assert!(jar.path().exists());
    }

    #[test]
    fn test_save_overwrites_prior_snapshot() {
        let tmp = TempDir::new().expect("create temp dir");
        let jar = CookieJar::new(tmp.path().join("cookies.json"));

        jar.save(&[sample_cookie()]).expect("first save");
        jar.save(&[]).expect("second save");

        let snapshot = jar.load().expect("load snapshot");
        assert!(snapshot.cookies.is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_is_malformed() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("cookies.json");
        fs::write(&path, "not json").expect("write corrupt file");

        let jar = CookieJar::new(path);
        assert!(matches!(jar.load(), Err(CookieStoreError::Malformed(_))));
    }
}
