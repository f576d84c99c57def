use std::{
    path::Path,
    thread,
    time::{Duration, Instant},
};

use image::RgbaImage;
use log::info;
use sdl2::{
    event::Event,
    mouse::MouseButton,
    pixels::PixelFormatEnum,
    render::{BlendMode, Canvas, Texture, TextureCreator},
    video::{Window, WindowContext},
    EventPump, Sdl,
};

use crate::{
    display::{GridConfig, PixelPosition, WINDOW_TITLE},
    error::GameError,
    game::{Game, InputEvent, LoopState},
};

pub const SPRITE_PATHS: [&str; 2] = ["mole_01.png", "mole_02.png"];

// RGBA bytes in memory, whatever the host byte order.
#[cfg(target_endian = "little")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::ABGR8888;
#[cfg(target_endian = "big")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::RGBA8888;

/// Window, canvas and input queue. Dropping it closes the window and shuts
/// SDL down, whichever way `run` exits.
pub struct Session {
    pub canvas: Canvas<Window>,
    pub event_pump: EventPump,
    _sdl_context: Sdl,
}

impl Session {
    pub fn open(config: &GridConfig) -> Result<Self, GameError> {
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;

        let window = video_subsystem
            .window(WINDOW_TITLE, config.screen_width, config.screen_height)
            .position_centered()
            .build()
            .map_err(GameError::sdl)?;

        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;
        let canvas = window.into_canvas().build().map_err(GameError::sdl)?;
        info!(
            "Opened {}x{} window \"{}\"",
            config.screen_width, config.screen_height, WINDOW_TITLE
        );

        Ok(Self {
            canvas,
            event_pump,
            _sdl_context: sdl_context,
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!("Closing window");
    }
}

/// Reads and decodes an image file into RGBA8 pixels.
pub fn decode_sprite(path: &Path) -> Result<RgbaImage, GameError> {
    let img = image::open(path).map_err(|source| GameError::AssetLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

pub fn load_sprite<'t, P: AsRef<Path>>(
    texture_creator: &'t TextureCreator<WindowContext>,
    path: P,
) -> Result<Texture<'t>, GameError> {
    let path = path.as_ref();
    let img = decode_sprite(path)?;
    let (width, height) = img.dimensions();

    let mut texture = texture_creator
        .create_texture_static(RGBA_BYTES, width, height)
        .map_err(GameError::sdl)?;
    texture
        .update(None, img.as_raw(), width as usize * 4)
        .map_err(GameError::sdl)?;
    texture.set_blend_mode(BlendMode::Blend);

    info!("Loaded sprite {} ({}x{})", path.display(), width, height);
    Ok(texture)
}

pub fn load_sprites<'t>(
    texture_creator: &'t TextureCreator<WindowContext>,
    paths: &[&str],
) -> Result<Vec<Texture<'t>>, GameError> {
    paths
        .iter()
        .map(|path| load_sprite(texture_creator, path))
        .collect()
}

impl From<&Event> for InputEvent {
    fn from(event: &Event) -> Self {
        match *event {
            Event::Quit { .. } => InputEvent::Close,
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => InputEvent::PointerPress(PixelPosition::new(x, y)),
            _ => InputEvent::Other,
        }
    }
}

/// Caps the loop at a fixed frame rate by sleeping out the rest of each frame.
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Time left in the frame budget after `elapsed`; zero on overrun.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame().saturating_sub(elapsed)
    }

    pub fn tick(&mut self) {
        let remaining = self.remaining(self.last_tick.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

pub fn run(config: GridConfig) -> Result<(), GameError> {
    let mut session = Session::open(&config)?;
    let texture_creator = session.canvas.texture_creator();
    let sprites = load_sprites(&texture_creator, &SPRITE_PATHS)?;

    let mut game = Game::new(config, &sprites, rand::thread_rng())?;
    let mut clock = FrameClock::new(config.target_fps);

    while game.state() == LoopState::Running {
        let events = session
            .event_pump
            .poll_iter()
            .map(|event| InputEvent::from(&event));
        if game.frame(events, &mut session.canvas)? == LoopState::Stopped {
            break;
        }
        clock.tick();
    }

    info!("Mole finished at {:?}", game.mole().position());
    Ok(())
}
