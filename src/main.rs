//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run one command.
//! No business logic here.
//!
//! Usage:
//!   sayaka-common exists <path>
//!   sayaka-common read <path>
//!   sayaka-common write <path> <text>
//!   sayaka-common annotate <authority|-> <text>
//!   sayaka-common render <template> [key=value | value]...

use dotenv::dotenv;
use sayaka_common::adapters::persistence::{FsTextStore, JsonCodec};
use sayaka_common::domain::{Authority, build_placeholder};
use sayaka_common::ports::TextStore;
use sayaka_common::shared::config::AppConfig;
use sayaka_common::shared::dispatch::{InvalidArgument, requires, throws};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    let cfg = AppConfig::load()?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cfg.log_or_default().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let data_dir = PathBuf::from(cfg.data_dir_or_default());
    info!(path = %data_dir.display(), "data directory");
    let store: Arc<dyn TextStore> = Arc::new(FsTextStore::new(&data_dir));
    let codec = if cfg.json_pretty_or_default() {
        JsonCodec::pretty()
    } else {
        JsonCodec::new()
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    requires::<InvalidArgument>(!args.is_empty(), Some("missing command"))?;
    let rest = &args[1..];

    match args[0].as_str() {
        "exists" => {
            requires::<InvalidArgument>(rest.len() == 1, Some("usage: exists <path>"))?;
            println!("{}", store.exists(Path::new(&rest[0])));
        }
        "read" => {
            requires::<InvalidArgument>(rest.len() == 1, Some("usage: read <path>"))?;
            let text = store.read(Path::new(&rest[0])).await?;
            print!("{}", text);
        }
        "write" => {
            requires::<InvalidArgument>(rest.len() == 2, Some("usage: write <path> <text>"))?;
            store.write(Path::new(&rest[0]), rest[1].clone())?.await?;
        }
        "annotate" => {
            requires::<InvalidArgument>(
                rest.len() == 2,
                Some("usage: annotate <authority|-> <text>"),
            )?;
            let authority = match rest[0].as_str() {
                "-" => None,
                name => Some(Authority::from_name(name).ok_or_else(|| {
                    throws::<InvalidArgument>(Some(format!("unknown authority: {}", name).as_str()))
                })?),
            };
            let chain = sayaka_common::usecases::annotate_text(&rest[1], authority);
            println!("{}", codec.to_json(&chain)?);
        }
        "render" => {
            requires::<InvalidArgument>(
                !rest.is_empty(),
                Some("usage: render <template> [key=value | value]..."),
            )?;
            let placeholder = build_placeholder(|b| {
                for arg in &rest[1..] {
                    match arg.split_once('=') {
                        Some((key, value)) => b.set(key, value),
                        None => b.push(arg.as_str()),
                    };
                }
            });
            println!("{}", placeholder.format(&rest[0]));
        }
        other => {
            let msg = format!("unknown command: {}", other);
            return Err(throws::<InvalidArgument>(Some(msg.as_str())).into());
        }
    }

    Ok(())
}
