use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    OpenSslError(#[from] openssl::error::ErrorStack),
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
}
