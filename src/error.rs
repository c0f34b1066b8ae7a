//! Crate-level error type.

use crate::annotation::AnnotationError;
use crate::codec::CodecError;
use crate::draw::{CompositeError, SurfaceError};
use thiserror::Error;

/// Any failure surfaced by [`crate::input::InteractionController`].
///
/// None of these are fatal. The embedding UI shows import and export errors
/// to the user and ignores the rest.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Composite(#[from] CompositeError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}

pub type CanvasResult<T> = Result<T, CanvasError>;
