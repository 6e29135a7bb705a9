//! Basic example demonstrating the service bridge.
//!
//! Run with: cargo run --example basic

use svcbridge::ServiceBridge;

fn main() -> svcbridge::Result<()> {
    println!("API Version: {}", svcbridge::api_version());
    println!(
        "Version compatible with 0.1: {}",
        svcbridge::api_version_compatible(0, 1)
    );

    println!("\n--- Creating bridge ---");
    let mut bridge = ServiceBridge::new()?;
    println!("Token: {}", bridge.token());
    println!("Live handles: {}", svcbridge::live_handles());

    println!("\n--- Forwarding messages ---");
    for message in [1, 2, 42] {
        bridge.process(message)?;
        println!("Processed {message}");
    }

    println!("\n--- Releasing ---");
    bridge.release();
    println!("Live handles: {}", svcbridge::live_handles());

    match bridge.process(7) {
        Err(e) if e.is_use_after_release() => println!("Rejected after release: {e}"),
        other => println!("Unexpected result: {other:?}"),
    }

    Ok(())
}
