use sdl2::{
    pixels::Color,
    rect::Rect,
    render::{Canvas, Texture},
    video::Window,
};

use crate::{display::PixelPosition, error::GameError};

/// Everything a frame needs from a render target. `S` is the sprite type
/// the target knows how to blit.
pub trait Painter<S> {
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: PixelPosition, to: PixelPosition, color: Color)
        -> Result<(), GameError>;
    /// Draws `sprite` at its natural size with its top-left corner at `top_left`.
    fn blit(&mut self, sprite: &S, top_left: PixelPosition) -> Result<(), GameError>;
    fn present(&mut self);
}

impl<'t> Painter<Texture<'t>> for Canvas<Window> {
    fn clear(&mut self, color: Color) {
        self.set_draw_color(color);
        Canvas::clear(self);
    }

    fn line(
        &mut self,
        from: PixelPosition,
        to: PixelPosition,
        color: Color,
    ) -> Result<(), GameError> {
        self.set_draw_color(color);
        self.draw_line(from, to).map_err(GameError::Sdl)
    }

    fn blit(&mut self, sprite: &Texture<'t>, top_left: PixelPosition) -> Result<(), GameError> {
        let query = sprite.query();
        let dst = Rect::new(top_left.x, top_left.y, query.width, query.height);
        self.copy(sprite, None, dst).map_err(GameError::Sdl)
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}
