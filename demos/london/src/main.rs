//! london — interactive cab booking over a small London road map.
//!
//! Riders pick a pickup and a drop-off district by letter; the nearest free
//! cab (by road distance) is sent.  Every few bookings the whole fleet is
//! released again, wherever the cabs happen to be.

mod network;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rd_core::{DispatchConfig, LocationCode};
use rd_dispatch::{DispatchError, DispatchObserver, DispatchOutcome, Dispatcher, DispatcherBuilder, ResetPolicy};
use rd_graph::{DijkstraRouter, Router};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "london", about = "Book cabs across a small London road map")]
struct Cli {
    /// Release every cab after this many booking attempts
    #[arg(long, default_value_t = rd_core::config::DEFAULT_RESET_THRESHOLD)]
    reset_threshold: u32,

    /// Seed for customer id generation
    #[arg(long, default_value_t = rd_core::config::DEFAULT_SEED)]
    seed: u64,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "rd_dispatch=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

// ── Console observer ──────────────────────────────────────────────────────────

struct ConsoleObserver;

impl DispatchObserver for ConsoleObserver {
    fn on_reset(&mut self, released: usize) {
        println!("(Fleet reset: {released} cab(s) back in service.)");
    }
}

// ── Prompts ───────────────────────────────────────────────────────────────────

/// Print `label` and read one trimmed line.  `None` on end of input.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_owned())),
        None => Ok(None),
    }
}

fn print_locations<R: Router, P: ResetPolicy>(dispatcher: &Dispatcher<R, P>) {
    println!("\nAvailable locations:");
    for loc in dispatcher.locations().iter() {
        println!("{}) {}", loc.code.0, loc.name);
    }
}

fn print_map<R: Router, P: ResetPolicy>(dispatcher: &Dispatcher<R, P>) -> Result<()> {
    let locations = dispatcher.locations();
    for loc in locations.iter() {
        let neighbours = dispatcher.graph.neighbours(loc.code)?;
        let listed: Vec<String> = neighbours
            .iter()
            .map(|(code, km)| format!("{}({km})", locations.name(*code).unwrap_or_default()))
            .collect();
        println!("Neighbours of {}: {}", loc.name, listed.join(" "));
    }
    Ok(())
}

fn print_bookings<R: Router, P: ResetPolicy>(dispatcher: &Dispatcher<R, P>) {
    if dispatcher.ledger.is_empty() {
        println!("No bookings yet.");
        return;
    }
    let locations = dispatcher.locations();
    for b in dispatcher.ledger.iter() {
        println!(
            "{}  customer {}  cab {}  {} -> {}",
            b.id,
            b.customer,
            b.cab,
            locations.name(b.pickup).unwrap_or_default(),
            locations.name(b.dropoff).unwrap_or_default(),
        );
    }
}

/// Collect one booking from the console.  Returns `false` on end of input.
fn book<R: Router, P: ResetPolicy>(
    dispatcher: &mut Dispatcher<R, P>,
    lines:      &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    print_locations(dispatcher);

    let Some(name) = prompt(lines, "Enter name: ")? else { return Ok(false) };
    let Some(pickup) = prompt(lines, "Enter current location (choose letter from above): ")? else {
        return Ok(false);
    };
    let pickup: LocationCode = match dispatcher.locations().parse_code(&pickup) {
        Ok(code) => code,
        Err(e) => {
            println!("Invalid location entered ({e}).");
            return Ok(true);
        }
    };
    let Some(dropoff) = prompt(lines, "Enter destination location (choose letter from above): ")? else {
        return Ok(false);
    };
    let dropoff: LocationCode = match dispatcher.locations().parse_code(&dropoff) {
        Ok(code) => code,
        Err(e) => {
            println!("Invalid location entered ({e}).");
            return Ok(true);
        }
    };

    let request = match dispatcher.new_request(name, pickup, dropoff) {
        Ok(r) => r,
        Err(DispatchError::SameOriginDestination(_)) => {
            println!("Current location and destination are the same.");
            return Ok(true);
        }
        Err(e) => {
            println!("{e}");
            return Ok(true);
        }
    };
    println!("Customer ID: {}", request.customer_id);

    match dispatcher.submit(&request, &mut ConsoleObserver)? {
        DispatchOutcome::Booked(c) => {
            println!("Cab booked successfully!");
            println!("Booking ID: {}", c.booking.id);
            println!("Cab ID: {} ({})", c.booking.cab, c.vehicle);
            println!("Driver: {}", c.driver);
            println!("Pick Up: {} (cab is {} away)", c.pickup_name, c.pickup_distance);
            println!("Drop: {}", c.dropoff_name);
        }
        DispatchOutcome::NoCabAvailable => println!("Sorry, no available cabs were found."),
    }
    Ok(true)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let config = DispatchConfig { reset_threshold: cli.reset_threshold, seed: cli.seed };
    let mut dispatcher = DispatcherBuilder::new(config, network::locations()?, DijkstraRouter)
        .roads(network::roads())
        .cabs(network::fleet())
        .build()?;
    tracing::info!(
        locations = dispatcher.locations().len(),
        roads = dispatcher.graph.road_count(),
        cabs = dispatcher.fleet.len(),
        "dispatcher ready"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\nEnter your choice:");
        println!("1. Book a cab");
        println!("2. Show road map");
        println!("3. Show bookings");
        println!("4. Exit");
        let Some(choice) = prompt(&mut lines, "")? else { break };

        match choice.as_str() {
            "1" => {
                if !book(&mut dispatcher, &mut lines)? {
                    break;
                }
            }
            "2" => print_map(&dispatcher)?,
            "3" => print_bookings(&dispatcher),
            "4" => {
                println!("Exiting program.");
                break;
            }
            _ => println!("Invalid choice."),
        }
    }

    Ok(())
}
