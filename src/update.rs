use std::fmt;

/// A published application release, as reported by whatever hosts the
/// artifacts. Download mechanics live with the caller; this module only
/// covers the decision logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Release tag, with or without a leading `v` (e.g. `v1.4.0`).
    pub tag_name: String,
    /// Release notes shown to the user before updating.
    pub body: String,
    pub asset_url: String,
}

impl Release {
    /// Tag with the conventional `v` prefix stripped.
    pub fn version(&self) -> &str {
        self.tag_name.strip_prefix('v').unwrap_or(&self.tag_name)
    }

    /// A release is an update whenever its version differs from the
    /// installed one; there is no ordering assumption, the host only ever
    /// reports the latest release.
    pub fn is_update_for(&self, installed_version: &str) -> bool {
        self.version() != installed_version
    }
}

#[derive(Debug)]
pub enum UpdateError {
    Unavailable(String),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::Unavailable(msg) => write!(f, "release feed unavailable: {msg}"),
        }
    }
}

impl std::error::Error for UpdateError {}

/// Version-check endpoint. `None` means no release has been published.
pub trait ReleaseChecker {
    fn latest_release(&self) -> Result<Option<Release>, UpdateError>;
}

/// Asks `checker` for the latest release and returns it only when it
/// differs from the installed version.
pub fn check_for_update<C: ReleaseChecker>(
    checker: &C,
    installed_version: &str,
) -> Result<Option<Release>, UpdateError> {
    let release = checker.latest_release()?;
    Ok(release.filter(|release| release.is_update_for(installed_version)))
}

/// Progress of an artifact download, reported by the external downloader.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadStatus {
    InProgress(f32),
    Success,
    Error(String),
}

impl DownloadStatus {
    /// Whether a download is still running (drives an indeterminate busy
    /// indicator).
    pub fn is_active(&self) -> bool {
        matches!(self, DownloadStatus::InProgress(_))
    }

    /// Progress as a percentage for a determinate bar: running downloads
    /// report their own figure, success is 100, everything else 0.
    pub fn percentage(&self) -> f32 {
        match self {
            DownloadStatus::InProgress(percentage) => *percentage,
            DownloadStatus::Success => 100.0,
            DownloadStatus::Error(_) => 0.0,
        }
    }
}
