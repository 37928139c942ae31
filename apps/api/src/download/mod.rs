// Downloadable site: multipart intake, README text and the in-memory zip.
// Zip building is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod archive;
pub mod handlers;
pub mod readme;
pub mod upload;
