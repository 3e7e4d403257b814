//! Counter Store
//!
//! This example demonstrates a store with an initial effect and a
//! per-dispatch effect that chains follow-up actions.
//!
//! Key concepts:
//! - Synchronous transition and listener notification
//! - Effects that yield the next action
//! - Effect failures logged and swallowed
//!
//! Run with: RUST_LOG=unistate=trace cargo run --example counter

use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;
use unistate::effects::{effect_failed, next_action, no_action};
use unistate::{Store, StoreBuilder};

#[derive(Debug)]
enum Counter {
    Increment,
    Decrement,
    Sync(i32),
}

fn update(n: &i32, action: &Counter) -> i32 {
    match action {
        Counter::Increment => n + 1,
        Counter::Decrement => n - 1,
        Counter::Sync(payload) => *payload,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("unistate=debug".parse()?))
        .init();

    println!("=== Counter Store Example ===\n");

    LocalSet::new()
        .run_until(async {
            let store: Store<i32, Counter> = StoreBuilder::new()
                .initial(0)
                .transition(update)
                .initial_effect(|_| next_action(Counter::Sync(10)))
                .effect(|n: &i32, action: &Counter| match action {
                    Counter::Decrement if *n < 0 => effect_failed("counter went negative"),
                    Counter::Increment if n % 5 != 0 => next_action(Counter::Increment),
                    _ => no_action(),
                })
                .build()?;

            let observer = store.clone();
            let subscription = store.subscribe(move || {
                println!("  [Listener] model is now {}", observer.model());
            });

            println!("Before the initial effect resolves: {}", store.model());
            store.idle().await;
            println!("After the initial effect: {}\n", store.model());

            println!("Dispatching Increment (chains up to the next multiple of 5):");
            store.dispatch(Counter::Increment);
            store.idle().await;

            println!("\nSyncing to -1, then decrementing (effect fails, chain stops):");
            store.sync(|_| Counter::Sync(-1));
            store.dispatch(Counter::Decrement);
            store.idle().await;

            subscription.unsubscribe();
            store.dispatch(Counter::Increment);
            store.idle().await;
            println!("\nFinal model after unsubscribing: {}", store.model());

            Ok::<_, Box<dyn std::error::Error>>(())
        })
        .await?;

    println!("\n=== Example Complete ===");
    Ok(())
}
