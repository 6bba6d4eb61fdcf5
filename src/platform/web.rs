//! Browser bridge
//!
//! JavaScript drives the loop from `requestAnimationFrame`, forwards key
//! presses and draws whatever `snapshot_json` returns.

use wasm_bindgen::prelude::*;

use crate::Game;
use crate::is_primary_key;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Capybara Runner (web) starting...");
}

/// Game handle owned by the page
#[wasm_bindgen]
pub struct WebRunner {
    game: Game,
    /// Timestamp of the previous frame (ms)
    last_time: Option<f64>,
}

#[wasm_bindgen]
impl WebRunner {
    /// New runner seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebRunner {
        let seed = js_sys::Date::now() as u64;
        WebRunner {
            game: Game::new(seed),
            last_time: None,
        }
    }

    /// Primary action from a button or tap
    pub fn press(&mut self) {
        self.game.press();
    }

    /// Keyboard handler; returns true if the key was consumed
    pub fn key_down(&mut self, code: &str) -> bool {
        if is_primary_key(code) {
            self.game.press();
            true
        } else {
            false
        }
    }

    /// "Play again" button
    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.game.set_autopilot(enabled);
    }

    /// Advance to `time` (ms, from requestAnimationFrame); returns ticks run
    pub fn frame(&mut self, time: f64) -> u32 {
        let elapsed = match self.last_time {
            Some(last) => ((time - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(time);
        self.game.frame(elapsed)
    }

    /// Current state for drawing
    pub fn snapshot_json(&self) -> String {
        self.game.snapshot().to_json()
    }
}

impl Default for WebRunner {
    fn default() -> Self {
        Self::new()
    }
}
