//! Dump the deterministic proof-input vectors as JSON.

fn main() {
    let vectors = zether_client::bench_vectors::deterministic_vectors();
    println!(
        "{}",
        serde_json::to_string_pretty(&vectors).expect("vectors serialize")
    );
}
