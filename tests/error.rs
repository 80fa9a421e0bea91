use rogue::error::{ComponentKind, EntityError, GameError, GameResult, TextureError};

#[test]
fn test_game_error_from_entity_error() {
    let entity_error = EntityError::MissingComponent {
        id: "hero".to_string(),
        kind: ComponentKind::Update,
    };
    let game_error: GameError = entity_error.into();
    assert!(matches!(game_error, GameError::Entity(_)));
}

#[test]
fn test_game_error_from_texture_error() {
    let texture_error = TextureError::RenderFailed("device lost".to_string());
    let game_error: GameError = texture_error.into();
    assert!(matches!(game_error, GameError::Texture(_)));
}

#[test]
fn test_component_kind_display() {
    assert_eq!(ComponentKind::Update.to_string(), "update");
    assert_eq!(ComponentKind::Render.to_string(), "render");
}

#[test]
fn test_entity_error_display() {
    let error = EntityError::MissingComponent {
        id: "torch".to_string(),
        kind: ComponentKind::Render,
    };
    assert_eq!(error.to_string(), "Entity 'torch' has no render component");
}

#[test]
fn test_texture_error_display() {
    let error = TextureError::AtlasTileNotFound("hero".to_string());
    assert_eq!(error.to_string(), "Texture not found in atlas: hero");

    let error = TextureError::Disposed("hero".to_string());
    assert_eq!(error.to_string(), "Sprite already disposed: hero");
}

#[test]
fn test_game_error_display_wraps_source() {
    let error: GameError = TextureError::RenderFailed("device lost".to_string()).into();
    assert_eq!(error.to_string(), "Texture error: Rendering failed: device lost");

    let error: GameError = EntityError::MissingComponent {
        id: "torch".to_string(),
        kind: ComponentKind::Render,
    }
    .into();
    assert_eq!(error.to_string(), "Entity error: Entity 'torch' has no render component");
}

#[test]
fn test_question_mark_conversion() {
    fn lookup() -> GameResult<()> {
        Err::<(), _>(TextureError::AtlasTileNotFound("missing".to_string()))?;
        Ok(())
    }

    assert!(matches!(
        lookup(),
        Err(GameError::Texture(TextureError::AtlasTileNotFound(_)))
    ));
}
