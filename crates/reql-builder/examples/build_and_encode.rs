use anyhow::Result;
use reql_builder::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    // Select, filter, and delete in one pipeline
    let query = r
        .table("users")
        .filter(Datum::from(json!({"active": false})))
        .delete()
        .opt_arg("durability", "soft");

    println!("wire term:");
    println!("{}", serde_json::to_string_pretty(&query.encode()?)?);

    // The same term wrapped in the frame the transport would send
    let frame = r
        .table("users")
        .get_all(["alice", "bob"])
        .opt_arg("index", "name")
        .into_frame()
        .with_global_opt("db", r.db("test"));

    println!("query frame:");
    println!("{}", serde_json::to_string_pretty(&frame.encode()?)?);

    Ok(())
}
