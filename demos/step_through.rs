//! Step-Through Walkthrough
//!
//! This demo drives the controller by hand, one expiry at a time.
//!
//! Key concepts:
//! - The controller only moves when told a countdown expired
//! - A press is serviced at the next `CAR_RED` decision
//! - Presses while a request is waiting do not add walks
//!
//! Run with: cargo run --example step_through

use crosswalk::controller::Controller;
use crosswalk::observer::{LoggingObserver, TransitionLog};

fn main() {
    env_logger::init();

    println!("=== Crosswalk Step-Through ===\n");

    let history = TransitionLog::with_capacity(64);
    let mut controller = Controller::new()
        .with_observer(Box::new(LoggingObserver))
        .with_observer(Box::new(history.clone()));

    let entered = controller.initialize();
    println!("Start: {} for {} ({})\n", entered.name(), entered.duration, entered.signals);

    println!("Vehicle loop, no pedestrian:");
    for _ in 0..4 {
        let entered = controller.timeout_expired();
        println!("  -> {:<15} {:>2}  {}", entered.name(), entered.duration, entered.signals);
    }

    println!("\nPedestrian presses the button three times during green:");
    for _ in 0..3 {
        println!("  press: {:?}", controller.button_pressed());
    }

    for _ in 0..7 {
        let entered = controller.timeout_expired();
        println!(
            "  -> {:<15} {:>2}  {}  request pending: {}",
            entered.name(),
            entered.duration,
            entered.signals,
            controller.has_pedestrian_request()
        );
    }

    println!("\nSummary:");
    println!("  transitions:          {}", history.transition_count());
    println!("  transitions retained: {}", history.len());
    println!("  walk phases:          {}", history.walk_count());
    match serde_json::to_string(&controller.snapshot()) {
        Ok(json) => println!("  snapshot:             {json}"),
        Err(e) => eprintln!("  snapshot failed: {e}"),
    }

    println!("\n=== Walkthrough Complete ===");
}
