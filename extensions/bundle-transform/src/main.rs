use shopify_function::prelude::*;
use std::process;

mod bundle;
mod cart;
mod error;
mod matcher;
mod merge;
pub mod run;
mod transform;

#[typegen("schema.graphql")]
pub mod schema {
    #[query("src/run.graphql")]
    pub mod run {}
}

fn main() {
    log!("Please invoke a named export.");
    process::abort();
}
