//! Interactive Intersection
//!
//! A tokio interval ticks the driver once per time unit while stdin acts as
//! the pedestrian button.
//!
//! Key concepts:
//! - The timer loop owns the countdown, the controller owns the durations
//! - Timer ticks and button presses are serialized through one task
//! - Configuration is loaded from an optional JSON file
//!
//! Run with: cargo run --example intersection -- [config.json]
//! Press Enter to request a crossing, `q` + Enter to quit.

use crosswalk::config::CrosswalkConfig;
use crosswalk::controller::Controller;
use crosswalk::driver::Driver;
use crosswalk::observer::{LoggingObserver, TransitionLog};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

enum Input {
    Press,
    Quit,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match CrosswalkConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config error: {e}");
                std::process::exit(1);
            }
        },
        None => CrosswalkConfig::default(),
    };

    let history = TransitionLog::with_capacity(config.history_capacity);
    let mut controller = Controller::new().with_observer(Box::new(history.clone()));
    if config.log_signals {
        controller.add_observer(Box::new(LoggingObserver));
    }
    let mut driver = Driver::new(controller);

    let (tx, mut rx) = mpsc::channel(16);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let input = if line.trim().eq_ignore_ascii_case("q") {
                Input::Quit
            } else {
                Input::Press
            };
            let quit = matches!(input, Input::Quit);
            if tx.send(input).await.is_err() || quit {
                break;
            }
        }
    });

    println!("=== Crosswalk Intersection ===");
    println!("Enter: request crossing | q: quit\n");

    let entered = driver.start();
    println!("{:<15} {}  ({} left)", entered.name(), entered.signals, driver.remaining());

    let mut interval = tokio::time::interval(config.time_unit());
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match driver.tick() {
                    Some(entered) => println!(
                        "{:<15} {}  ({} left)",
                        entered.name(),
                        entered.signals,
                        driver.remaining()
                    ),
                    None => println!("{:<15} {} left", "", driver.remaining()),
                }
            }
            input = rx.recv() => match input {
                Some(Input::Press) => println!("button: {:?}", driver.press()),
                Some(Input::Quit) | None => break,
            },
        }
    }

    println!("\nTransitions:          {}", history.transition_count());
    println!("Transitions retained: {}", history.len());
    println!("Walk phases:          {}", history.walk_count());
}
