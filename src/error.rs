//! Centralized error types for the entity scaffolding.
//!
//! Lookup misses are never errors; they surface as `None`. The types here cover
//! the failures an entity or its collaborators can actually report.

/// Main error type for the crate.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
}

/// The two strategy slots an entity delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ComponentKind {
    #[strum(serialize = "update")]
    Update,
    #[strum(serialize = "render")]
    Render,
}

/// Errors related to entity operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("Entity '{id}' has no {kind} component")]
    MissingComponent { id: String, kind: ComponentKind },
}

/// Errors related to sprite and batch operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TextureError {
    #[error("Texture not found in atlas: {0}")]
    AtlasTileNotFound(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    #[error("Sprite already disposed: {0}")]
    Disposed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
