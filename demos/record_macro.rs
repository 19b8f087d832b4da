//! Inspect the descriptor table generated by `record!`.
//!
//! Run with: cargo run --example record_macro

use routeros_wire::{record, Record};

record! {
    /// A GRE tunnel interface.
    #[derive(Debug, Clone, Default)]
    pub struct InterfaceGre {
        pub id: String => ".id",
        pub name: String => "name",
        pub local_address: String => "local-address",
        pub remote_address: String => "remote-address",
        pub keepalive_interval: i64 => "keepalive-interval,ttlToSeconds",
        pub allow_fast_path: bool => "allow-fast-path",
        pub comment: String,
    }
}

fn main() {
    println!("{:<20} {:<22} {:<8} modifiers", "field", "wire key", "kind");
    for descriptor in InterfaceGre::descriptors() {
        println!(
            "{:<20} {:<22} {:<8} {}",
            descriptor.name,
            descriptor.wire_key,
            descriptor.kind.to_string(),
            descriptor.modifiers.join(",")
        );
    }
}
