use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use homestay_auth::{AllowedRoles, Role};
use homestay_gate::GateProps;
use homestay_session::SessionConfig;

mod check;

use check::Target;

#[derive(Debug, Parser)]
#[command(
    name = "homestay-gate",
    about = "Evaluate a route gate against an access token",
    group(ArgGroup::new("target").required(true).args(["route", "roles"]))
)]
struct Args {
    /// Path to look up in the protected route table
    #[arg(long, value_name = "PATH")]
    route: Option<String>,
    /// Allowed roles for an ad-hoc gate (comma separated, case-sensitive)
    #[arg(long, value_name = "ROLE", value_delimiter = ',')]
    roles: Vec<String>,
    /// Fallback path for an ad-hoc gate (defaults to "/")
    #[arg(long, value_name = "PATH", requires = "roles")]
    fallback: Option<String>,
    /// Access token to evaluate; omit to simulate a signed-out visitor
    #[arg(long, env = "HOMESTAY_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl Args {
    fn target(&self) -> Target {
        match &self.route {
            Some(route) => Target::Route(route.clone()),
            None => {
                let roles: AllowedRoles = self
                    .roles
                    .iter()
                    .map(|r| Role::new(r.trim().to_string()))
                    .collect();
                let props = GateProps::new(roles);
                Target::Gate(match &self.fallback {
                    Some(path) => props.with_fallback(path.clone()),
                    None => props,
                })
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    homestay_observability::init();

    let args = Args::parse();
    let config = SessionConfig::from_env();

    let report = check::evaluate(&args.target(), args.token.as_deref(), &config)
        .await
        .context("gate evaluation failed")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to render report")?
    );
    Ok(())
}
