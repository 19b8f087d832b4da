//! Strict scalar parsing, single-sentence collections and duration re-encoding.
//!
//! Run with: cargo run --example custom_options

use routeros_wire::{
    from_reply_vec_with_options, from_reply_with_options, record, to_attributes_with_options,
    CodecOptions, CollectionPolicy, Reply, ScalarPolicy, Sentence,
};
use std::error::Error;

record! {
    #[derive(Debug, Clone, Default)]
    pub struct DhcpLease {
        pub id: String => ".id",
        pub address: String => "address",
        pub mac_address: String => "mac-address",
        pub lease_time: i64 => "lease-time,ttlToSeconds",
        pub blocked: bool => "blocked",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let reply = Reply::new(vec![vec![
        (".id", "*5"),
        ("address", "192.168.88.254"),
        ("mac-address", "00:11:22:33:44:55"),
        ("lease-time", "10m"),
        ("blocked", "perhaps"),
    ]
    .into_iter()
    .collect::<Sentence>()]);

    let lenient = CodecOptions::new();
    let lease: DhcpLease = from_reply_with_options(&reply, &lenient)?;
    println!("Lenient: blocked = {}", lease.blocked);

    let strict = CodecOptions::new().with_scalar_policy(ScalarPolicy::Strict);
    match from_reply_with_options::<DhcpLease>(&reply, &strict) {
        Ok(_) => println!("Strict: accepted"),
        Err(e) => println!("Strict: {}", e),
    }

    let single = CodecOptions::new().with_collection_policy(CollectionPolicy::AllowSingle);
    let leases: Vec<DhcpLease> = from_reply_vec_with_options(&reply, &single)?;
    println!("AllowSingle: {} lease(s)", leases.len());

    let plain = to_attributes_with_options(&lease, &lenient)?;
    let durations = to_attributes_with_options(&lease, &lenient.clone().with_encode_modifiers(true))?;
    for (a, b) in plain.iter().zip(durations.iter()) {
        println!("{:<14} {:<20} {}", a.key, a.value, b.value);
    }

    Ok(())
}
