use log::{debug, info};
use rand::Rng;

use crate::{
    display::{GridConfig, GridPosition, PixelPosition, BACKGROUND_COLOR},
    error::GameError,
    grid::draw_grid,
    mole::Mole,
    painter::Painter,
};

/// Input the game reacts to. Backends translate their native events into this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Close,
    PointerPress(PixelPosition),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Uniformly random cell other than `current`.
pub fn next_position<R: Rng + ?Sized>(
    config: &GridConfig,
    current: GridPosition,
    rng: &mut R,
) -> GridPosition {
    loop {
        let candidate = GridPosition::new(
            rng.gen_range(0..config.grid_width as i32),
            rng.gen_range(0..config.grid_height as i32),
        );
        if candidate != current {
            return candidate;
        }
    }
}

pub struct Game<'a, S, R> {
    config: GridConfig,
    mole: Mole<'a, S>,
    rng: R,
    state: LoopState,
}

impl<'a, S, R: Rng> Game<'a, S, R> {
    pub fn new(config: GridConfig, sprites: &'a [S], rng: R) -> Result<Self, GameError> {
        Ok(Self {
            config,
            mole: Mole::new(sprites, GridPosition::default())?,
            rng,
            state: LoopState::Running,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn mole(&self) -> &Mole<'a, S> {
        &self.mole
    }

    /// Processes events in order. A close request stops the game and leaves
    /// the rest of the batch unprocessed.
    pub fn handle_events<I>(&mut self, events: I) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Close => {
                    info!("Close requested");
                    self.state = LoopState::Stopped;
                    break;
                }
                InputEvent::PointerPress(point) => self.press(point),
                InputEvent::Other => {}
            }
        }
        self.state
    }

    fn press(&mut self, point: PixelPosition) {
        let current = self.mole.position();
        if self.config.screen_to_grid(point) != current {
            return;
        }

        let next = next_position(&self.config, current, &mut self.rng);
        self.mole.relocate(next);
        debug!(
            "Hit at {:?}, mole moved to {:?} (sprite {})",
            current,
            next,
            self.mole.sprite_index()
        );
    }

    /// One frame: drains `events`, then renders unless they stopped the game.
    pub fn frame<I, P>(&mut self, events: I, painter: &mut P) -> Result<LoopState, GameError>
    where
        I: IntoIterator<Item = InputEvent>,
        P: Painter<S>,
    {
        if self.handle_events(events) == LoopState::Running {
            self.render(painter)?;
        }
        Ok(self.state)
    }

    /// Clears, draws the grid and the mole, then presents the frame.
    pub fn render<P: Painter<S>>(&self, painter: &mut P) -> Result<(), GameError> {
        painter.clear(BACKGROUND_COLOR);
        draw_grid::<S, P>(&self.config, painter)?;
        self.mole.draw(&self.config, painter)?;
        painter.present();
        Ok(())
    }
}
