use crate::drawing::DrawingError;
use crate::providers::error::ProviderError;
use crate::series::store::SeriesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteomapError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Drawing(#[from] DrawingError),
}
