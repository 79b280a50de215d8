use clap::Args;

use graphme_core::GRAPH_ME_URL;

#[derive(Args)]
pub struct EndpointArgs {}

pub fn execute(_args: EndpointArgs) -> anyhow::Result<()> {
    println!("{}", GRAPH_ME_URL);
    Ok(())
}
