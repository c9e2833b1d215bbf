use clap::Parser;
use slugline_cli::{CliArgs, SluglineCli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let cli = SluglineCli::from_args("slugline", &args)?;
    cli.run(args).await?;
    Ok(())
}
