//! Capybara Runner entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native build runs a headless autopilot session and reports how it went.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use capybara_runner::consts::SIM_DT;
    use capybara_runner::{Game, GamePhase};

    env_logger::init();
    log::info!("Capybara Runner (native) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::new(seed);
    game.set_autopilot(true);
    game.press();

    // Headless demo: one tick per frame until the run ends or the reward
    // has been on screen for a while
    const TICK_LIMIT: u64 = 60_000;
    loop {
        game.frame(SIM_DT);
        let snap = game.snapshot();
        if snap.phase == GamePhase::GameOver || snap.elapsed_ticks >= TICK_LIMIT {
            break;
        }
        if snap.reward_revealed && snap.display_score >= game.state.tuning().reward_threshold + 10 {
            break;
        }
    }

    let snap = game.snapshot();
    println!("\nPhase:  {:?}", snap.phase);
    println!("Score:  {}", snap.score_label());
    println!("Speed:  {:.1}", snap.speed);
    println!("Ticks:  {}", snap.elapsed_ticks);
    match snap.reward {
        Some(code) => println!("Secret code: {}", code),
        None => println!("Secret code not reached"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
