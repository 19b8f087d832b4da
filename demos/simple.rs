//! Decode a reply into a record and encode it back into command words.
//!
//! Run with: cargo run --example simple

use routeros_wire::{from_reply, record, to_command_string, Reply, Sentence};
use std::error::Error;

record! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IpAddress {
        pub id: String => ".id",
        pub address: String => "address",
        pub network: String => "network",
        pub interface: String => "interface",
        pub disabled: bool => "disabled",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // What a transport would hand over for `/ip/address/print ?.id=*1`
    let sentence: Sentence = vec![
        (".id", "*1"),
        ("address", "192.168.88.1/24"),
        ("network", "192.168.88.0"),
        ("interface", "bridge"),
        ("disabled", "false"),
    ]
    .into_iter()
    .collect();

    let addr: IpAddress = from_reply(&Reply::new(vec![sentence]))?;
    println!("Decoded: {:?}\n", addr);

    let words = to_command_string(&addr)?;
    println!("Command attributes: {}", words);

    Ok(())
}
