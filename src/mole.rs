use crate::{
    display::{GridConfig, GridPosition},
    error::GameError,
    painter::Painter,
};

/// The single clickable mole. Borrows its sprites; they are loaded once at
/// startup and outlive the mole.
pub struct Mole<'a, S> {
    sprites: &'a [S],
    sprite_index: usize,
    position: GridPosition,
}

impl<'a, S> Mole<'a, S> {
    pub fn new(sprites: &'a [S], position: GridPosition) -> Result<Self, GameError> {
        if sprites.is_empty() {
            return Err(GameError::NoSprites);
        }

        Ok(Self {
            sprites,
            sprite_index: 0,
            position,
        })
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn sprite_index(&self) -> usize {
        self.sprite_index
    }

    /// Moves to `position` and switches to the next sprite. Does not check
    /// that the cell actually changed.
    pub fn relocate(&mut self, position: GridPosition) {
        self.position = position;
        self.sprite_index = (self.sprite_index + 1) % self.sprites.len();
    }

    pub fn draw<P: Painter<S>>(
        &self,
        config: &GridConfig,
        painter: &mut P,
    ) -> Result<(), GameError> {
        let top_left = config.grid_to_screen(self.position);
        painter.blit(&self.sprites[self.sprite_index], top_left)
    }
}
