use sdl2::pixels::Color;

use crate::{display::PixelPosition, error::GameError, painter::Painter};

/// Stand-in sprite: just an id so tests can tell which image was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite(pub u8);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Line(PixelPosition, PixelPosition, Color),
    Blit(Sprite, PixelPosition),
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub calls: Vec<DrawCall>,
}

impl RecordingPainter {
    pub fn blits(&self) -> Vec<(Sprite, PixelPosition)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Blit(sprite, at) => Some((*sprite, *at)),
                _ => None,
            })
            .collect()
    }
}

impl Painter<Sprite> for RecordingPainter {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn line(
        &mut self,
        from: PixelPosition,
        to: PixelPosition,
        color: Color,
    ) -> Result<(), GameError> {
        self.calls.push(DrawCall::Line(from, to, color));
        Ok(())
    }

    fn blit(&mut self, sprite: &Sprite, top_left: PixelPosition) -> Result<(), GameError> {
        self.calls.push(DrawCall::Blit(*sprite, top_left));
        Ok(())
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}
