use thiserror::Error;

use crate::domain::uom::UomError;
use crate::repository::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors exposed by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Form(String),
    #[error("the prices \"{first}\" and \"{second}\" for supplier \"{supplier}\" overlap")]
    PricesOverlap {
        first: String,
        second: String,
        supplier: String,
    },
    #[error(transparent)]
    Uom(#[from] UomError),
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
