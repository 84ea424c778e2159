/// Result alias used throughout the crate; errors are carried as `anyhow::Error`
/// so `DiffError` values and lower-level I/O errors travel through the same channel.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
