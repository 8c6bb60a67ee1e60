use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("Invalid configuration: {}", _0)]
    InvalidConfig(String),

    #[error("Map error: {}", _0)]
    Map(#[from] wallcaster_world::MapError),

    #[error("Geometry error: {}", _0)]
    Geometry(#[from] wallcaster_geometry::Error),

    #[error("Could not build the ray casting thread pool: {}", _0)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Could not read config {path}: {source}")]
    ConfigIo {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse config {path}: {source}")]
    ConfigParse {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
