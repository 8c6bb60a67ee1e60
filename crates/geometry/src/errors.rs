#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Circles must have a radius which is not negative, got {}", _0)]
    NegativeRadius(f64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
