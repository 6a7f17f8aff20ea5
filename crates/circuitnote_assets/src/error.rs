pub type AssetResult<T> = Result<T, AssetError>;

/// Failure modes of the asset lifecycle, grouped the way callers report
/// them: unsupported platform, remote failures, local filesystem failures.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("offline assets are unavailable: {reason}")]
    Unsupported { reason: &'static str },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{context} returned HTTP {status}")]
    Status { context: &'static str, status: u16 },

    #[error("{filename} not found in latest release")]
    AssetMissing { filename: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}
