use sdl2::{pixels::Color, rect::Point};

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 512;

pub const GRID_WIDTH: u32 = 20;
pub const GRID_HEIGHT: u32 = 16;

pub const TARGET_FPS: u32 = 60;
pub const WINDOW_TITLE: &str = "Whack-a-Mole";

pub const BACKGROUND_COLOR: Color = Color {
    r: 144,
    g: 238,
    b: 144,
    a: 255,
};
pub const GRID_LINE_COLOR: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Fixed playing field: a `grid_width` x `grid_height` grid stretched over a
/// `screen_width` x `screen_height` pixel canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    pub target_fps: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            target_fps: TARGET_FPS,
        }
    }
}

/// A cell of the logical grid, `(col, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPosition {
    pub col: i32,
    pub row: i32,
}

impl GridPosition {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// A point on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

impl PixelPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<PixelPosition> for Point {
    fn from(p: PixelPosition) -> Self {
        Point::new(p.x, p.y)
    }
}

impl GridConfig {
    pub fn cell_width(&self) -> u32 {
        self.screen_width / self.grid_width
    }

    pub fn cell_height(&self) -> u32 {
        self.screen_height / self.grid_height
    }

    /// Cell under a pixel. No clamping: the pointer is trusted to be inside
    /// the window.
    pub fn screen_to_grid(&self, point: PixelPosition) -> GridPosition {
        GridPosition {
            col: scale(point.x, self.screen_width, self.grid_width),
            row: scale(point.y, self.screen_height, self.grid_height),
        }
    }

    /// Top-left pixel of a cell. Uses the same floored ratio as
    /// `screen_to_grid` so sprites line up with the grid lines.
    pub fn grid_to_screen(&self, point: GridPosition) -> PixelPosition {
        PixelPosition {
            x: scale(point.col, self.grid_width, self.screen_width),
            y: scale(point.row, self.grid_height, self.screen_height),
        }
    }
}

// floor(value / from * to), computed exactly in integers
fn scale(value: i32, from: u32, to: u32) -> i32 {
    (value as i64 * to as i64).div_euclid(from as i64) as i32
}
