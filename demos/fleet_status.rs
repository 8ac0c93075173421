//! Fleet status changes
//!
//! This example walks a driver record through its lifecycle using the
//! repository shell and an in-memory store.
//!
//! Key concepts:
//! - Tables declared with exhaustive matches over a status enum
//! - Rejected changes leave the stored status untouched
//! - Unknown-state errors are not shown to users verbatim
//!
//! Run with: cargo run --example fleet_status

use statusgate::domains::{driver, DriverStatus};
use statusgate::repository::{InMemoryStore, RepositoryError, StatusRepository};
use stillwater::prelude::*;

#[tokio::main]
async fn main() {
    println!("=== Fleet Status Example ===\n");

    let store = InMemoryStore::new();
    let mut drivers: StatusRepository<DriverStatus, InMemoryStore<DriverStatus>> =
        StatusRepository::new(driver::validator(), driver::INITIAL_STATES.to_vec());

    match drivers.create("driver-7", DriverStatus::Pending).run(&store).await {
        Ok(change) => {
            println!("Created driver-7 as {}", change.to);
            drivers.apply(change);
        }
        Err(e) => println!("Create failed: {e}"),
    }

    for target in [
        DriverStatus::Approved,
        DriverStatus::Rejected,
        DriverStatus::Suspended,
        DriverStatus::Approved,
    ] {
        match drivers.change_status("driver-7", target).run(&store).await {
            Ok(change) => {
                println!("driver-7 -> {}", change.to);
                drivers.apply(change);
            }
            Err(RepositoryError::Rejected(rejection)) => {
                println!("Rejected: {}", rejection.public_message());
            }
            Err(e) => println!("Error: {e}"),
        }
    }

    match drivers.next_states(&store, "driver-7") {
        Ok(next) => {
            let labels: Vec<String> = next.iter().map(ToString::to_string).collect();
            println!("\nNext statuses for driver-7: {}", labels.join(", "));
        }
        Err(e) => println!("Error: {e}"),
    }

    let path: Vec<String> = drivers
        .history()
        .path()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    println!("History: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
}
