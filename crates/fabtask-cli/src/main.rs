use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fabtask_core::app::{AppBuilder, Runtime};
use fabtask_core::decorators::{hosts, roles, runs_once, task};
use fabtask_core::{Invocable, Task, TaskArgs, TaskResult};

#[derive(Debug, Parser)]
#[command(name = "fabtask", about = "Run the sample tasks across a list of hosts")]
struct Cli {
    /// Hosts to walk through, in order.
    #[arg(long, value_delimiter = ',', default_value = "user1@host1,host2")]
    hosts: Vec<String>,

    /// Roles attached to the deploy task.
    #[arg(long, value_delimiter = ',', default_value = "webserver")]
    roles: Vec<String>,

    /// Release to deploy.
    #[arg(long, default_value = "v1")]
    release: String,

    /// Print the registered tasks as JSON and exit.
    #[arg(long)]
    list: bool,
}

/// Pre-built task: counts how many hosts it was deployed to.
struct Deploy {
    deployed: AtomicU32,
}

#[async_trait]
impl Task for Deploy {
    fn name(&self) -> &str {
        "deploy"
    }

    fn description(&self) -> Option<&str> {
        Some("Deploy a release to the current host")
    }

    async fn run(&self, args: TaskArgs) -> TaskResult {
        let release: String = args.positional_as(0)?;
        let host: String = args.named_as("host")?;
        let n = self.deployed.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(%host, %release, "deployed");
        Ok(Some(serde_json::json!({ "host": host, "release": release, "count": n })))
    }
}

#[derive(Debug, Serialize)]
struct HostReport {
    host: String,
    setup: Option<serde_json::Value>,
    deploy: Option<serde_json::Value>,
}

fn build_runtime(cli: &Cli) -> Result<Runtime, Box<dyn std::error::Error>> {
    let setup = runs_once(
        task(Invocable::callable("setup", |args| {
            let host: String = args.named_as("host")?;
            tracing::info!(%host, "preparing shared release directory");
            Ok(Some(format!("prepared from {host}").into()))
        }))
        .decorate(roles(["build"])),
    );

    let deploy: Arc<dyn Task> = Arc::new(Deploy {
        deployed: AtomicU32::new(0),
    });
    let deploy = task(Invocable::task(deploy))
        .decorate(hosts(cli.hosts.iter().cloned()))
        .decorate(roles(cli.roles.iter().cloned()));

    let app = AppBuilder::new()
        .register(setup)?
        .register(deploy)?
        .expect_tasks(&["setup", "deploy"])
        .build()?;
    Ok(app.into_runtime())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let runtime = build_runtime(&cli)?;

    if cli.list {
        println!("{}", serde_json::to_string_pretty(&runtime.registry().summaries())?);
        return Ok(());
    }

    // Sequential walk over hosts; the real engine owns fan-out.
    let targets = runtime
        .registry()
        .get("deploy")
        .and_then(|d| d.hosts())
        .map(<[String]>::to_vec)
        .unwrap_or_default();

    let mut reports = Vec::with_capacity(targets.len());
    for host in targets {
        let setup = runtime
            .execute("setup", TaskArgs::new().kwarg("host", host.as_str()))
            .await?;
        let deploy = runtime
            .execute(
                "deploy",
                TaskArgs::new().arg(cli.release.as_str()).kwarg("host", host.as_str()),
            )
            .await?;
        reports.push(HostReport { host, setup, deploy });
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    println!("{}", serde_json::to_string_pretty(&runtime.registry().summaries())?);
    Ok(())
}
