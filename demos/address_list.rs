//! A firewall address-list round trip: add, read back, list.
//!
//! Run with: RUST_LOG=routeros_wire=trace cargo run --example address_list

use routeros_wire::{from_reply_required, from_reply_vec, record, Command, Reply, Sentence};
use std::error::Error;
use tracing_subscriber::{fmt, EnvFilter};

record! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IpFirewallAddressList {
        pub id: String => ".id",
        pub address: String => "address",
        pub list: String => "list",
        pub comment: String => "comment",
        pub timeout: i64 => "timeout,ttlToSeconds",
        pub disabled: bool => "disabled",
    }
}

fn sentence(pairs: &[(&str, &str)]) -> Sentence {
    pairs.iter().copied().collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("routeros_wire=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let entry = IpFirewallAddressList {
        address: "203.0.113.7".to_string(),
        list: "blocked".to_string(),
        comment: "scanner".to_string(),
        ..Default::default()
    };

    let add = Command::new("/ip/firewall/address-list/add").record(&entry)?;
    println!("add:   {:?}", add.words());

    // Simulated transport reply carrying the new id
    let created = Reply::default().with_done(sentence(&[("ret", "*2A")]));
    let id = created.ret().ok_or("no id returned")?;

    let find = Command::new("/ip/firewall/address-list/print").query(".id", id);
    println!("find:  {:?}", find.words());

    let found = Reply::new(vec![sentence(&[
        (".id", id),
        ("list", "blocked"),
        ("address", "203.0.113.7"),
        ("comment", "scanner"),
        ("timeout", "23h59m50s"),
        ("disabled", "false"),
    ])]);
    let stored: IpFirewallAddressList = from_reply_required(&found)?;
    println!("found: {:?}", stored);

    let listing = Reply::new(vec![
        sentence(&[(".id", "*2A"), ("address", "203.0.113.7"), ("list", "blocked")]),
        sentence(&[(".id", "*2B"), ("address", "203.0.113.8"), ("list", "blocked")]),
    ]);
    let all: Vec<IpFirewallAddressList> = from_reply_vec(&listing)?;
    println!("list:  {} entries", all.len());

    Ok(())
}
