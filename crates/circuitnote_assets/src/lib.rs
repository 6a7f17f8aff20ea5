pub mod error;
pub mod manager;
pub mod platform;
pub mod release;

pub use error::{AssetError, AssetResult};
pub use manager::{APP_DIR, AssetManager, ENTRY_POINT, default_install_dir};
pub use platform::Capability;
pub use release::{ASSET_FILENAME, ASSET_REPO, Release, ReleaseAsset, ReleaseClient};
