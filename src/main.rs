use claim_check::{CheckResult, FactCheckPipeline};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--schema") {
        println!("{}", serde_json::to_string_pretty(&CheckResult::json_schema())?);
        return Ok(());
    }

    let claim = args.join(" ");
    if claim.trim().is_empty() {
        anyhow::bail!("usage: claim-check <claim...> | claim-check --schema");
    }

    let result = FactCheckPipeline::shared().check(claim.trim()).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
