//! # Genesis CLI
//!
//! - `build`: read a build request (JSON), print the encoded reply
//! - `inspect`: decode an encoded payload and print the genesis as JSON

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use genesis_builder::{
    genesis_id, BuildGenesisArgs, BuildGenesisReply, Genesis, GenesisApi, GenesisConfigBuilder,
    GenesisService,
};
use serde::Serialize;
use shared_types::{formatting, Encoding, Id};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "asset-genesis")]
#[command(about = "Build and inspect canonical genesis payloads")]
pub struct Cli {
    /// Log filter, overriding GENESIS_LOG_LEVEL / RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a genesis payload from a JSON request
    Build(BuildCommand),
    /// Decode a genesis payload and print it as JSON
    Inspect(InspectCommand),
}

#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Request file (`networkID`, `encoding`, `genesisData`); `-` reads stdin
    #[arg(short, long)]
    pub input: PathBuf,

    /// Override the request's transport encoding (cb58 | hex)
    #[arg(short, long)]
    pub encoding: Option<Encoding>,

    /// Override the request's network ID
    #[arg(long)]
    pub network_id: Option<u32>,

    /// Codec version written in front of the payload
    #[arg(long, default_value_t = 0)]
    pub codec_version: u16,

    /// Write the reply here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectCommand {
    /// File holding the encoded payload (or a build reply); `-` reads stdin
    #[arg(short, long)]
    pub input: PathBuf,

    /// Payload encoding, when the input is bare text
    #[arg(short, long, default_value_t = Encoding::Cb58)]
    pub encoding: Encoding,

    /// Codec version the payload was written with
    #[arg(long, default_value_t = 0)]
    pub codec_version: u16,
}

/// What `inspect` prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    #[serde(rename = "genesisID")]
    pub genesis_id: Id,
    pub size: usize,
    pub genesis: Genesis,
}

/// Run one parsed command, returning what should be printed.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Build(cmd) => {
            let reply = build(cmd)?;
            let json = serde_json::to_string_pretty(&reply)?;
            match &cmd.output {
                Some(path) => {
                    fs::write(path, &json)
                        .with_context(|| format!("writing reply to {}", path.display()))?;
                    Ok(String::new())
                }
                None => Ok(json),
            }
        }
        Command::Inspect(cmd) => Ok(serde_json::to_string_pretty(&inspect(cmd)?)?),
    }
}

pub fn build(cmd: &BuildCommand) -> Result<BuildGenesisReply> {
    let text = read_input(&cmd.input)?;
    let mut args: BuildGenesisArgs = serde_json::from_str(&text)
        .with_context(|| format!("parsing build request {}", cmd.input.display()))?;

    if let Some(encoding) = cmd.encoding {
        args.encoding = encoding;
    }
    if let Some(network_id) = cmd.network_id {
        args.network_id = network_id;
    }

    let service = service(cmd.codec_version)?;
    let reply = service.build_genesis(&args).context("building genesis")?;
    info!(assets = args.genesis_data.len(), "Wrote genesis reply");
    Ok(reply)
}

pub fn inspect(cmd: &InspectCommand) -> Result<InspectReport> {
    let text = read_input(&cmd.input)?;
    let (encoding, payload) = match serde_json::from_str::<BuildGenesisReply>(&text) {
        Ok(reply) => (reply.encoding, reply.bytes),
        Err(_) => (cmd.encoding, text.trim().to_string()),
    };

    let bytes = formatting::decode(encoding, &payload)
        .with_context(|| format!("decoding {encoding} payload"))?;
    let genesis = service(cmd.codec_version)?
        .decode_genesis(&bytes)
        .context("decoding genesis")?;

    let id = genesis_id(&bytes);
    info!(genesis_id = %id, assets = genesis.txs.len(), "Decoded genesis");

    Ok(InspectReport {
        genesis_id: id,
        size: bytes.len(),
        genesis,
    })
}

fn service(codec_version: u16) -> Result<GenesisService> {
    let config = GenesisConfigBuilder::new()
        .codec_version(codec_version)
        .build()
        .context("configuring genesis builder")?;
    GenesisService::with_config(config).context("creating genesis service")
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
