use thiserror::Error;

use crate::Rect;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid geometry: {0:?} has a non-finite component")]
    InvalidGeometry(Rect),
    #[error("invalid style: {0}")]
    InvalidStyle(&'static str),
    #[error("cannot build a control from a description without `{0}`")]
    MissingInitData(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
