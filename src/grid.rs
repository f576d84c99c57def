use crate::{
    display::{GridConfig, PixelPosition, GRID_LINE_COLOR},
    error::GameError,
    painter::Painter,
};

/// Draws one vertical line per column and one horizontal line per row, each
/// spanning the whole canvas.
pub fn draw_grid<S, P: Painter<S>>(config: &GridConfig, painter: &mut P) -> Result<(), GameError> {
    let width = config.screen_width as i32;
    let height = config.screen_height as i32;
    let cell_width = config.cell_width() as i32;
    let cell_height = config.cell_height() as i32;

    for column in 0..config.grid_width as i32 {
        let x = column * cell_width;
        painter.line(
            PixelPosition::new(x, 0),
            PixelPosition::new(x, height),
            GRID_LINE_COLOR,
        )?;
    }

    for row in 0..config.grid_height as i32 {
        let y = row * cell_height;
        painter.line(
            PixelPosition::new(0, y),
            PixelPosition::new(width, y),
            GRID_LINE_COLOR,
        )?;
    }

    Ok(())
}
