use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MapError {
    #[error("The map grid is empty")]
    EmptyGrid,

    #[error("The map grid is not a rectangle: row {row} has {found} cells but the first row has {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown map symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },

    #[error("No such texture: {}", _0)]
    UnknownTexture(String),

    #[error("Texture {name} should be {expected} bytes for its resolution but is {found}")]
    TextureSize {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Screen dimensions must be positive, got {width}x{height}")]
    InvalidScreen { width: f64, height: f64 },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Could not encode the map cache: {}", _0)]
    CacheEncode(#[from] bincode::Error),
}

pub type Result<T, E = MapError> = std::result::Result<T, E>;
