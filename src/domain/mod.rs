//! Domain logic - version grammar independent of files and processes

pub mod prerelease;
pub mod version;

pub use prerelease::{PreRelease, PreReleaseKind};
pub use version::ReleaseVersion;
