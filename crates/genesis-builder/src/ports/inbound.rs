//! Inbound Ports (Driving Ports)
//!
//! The request/reply shapes and the API that front ends call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::Encoding;

use crate::domain::entities::number_or_string;
use crate::domain::{AssetDefinition, Genesis, GenesisError};

/// A build request as it arrives over JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildGenesisArgs {
    #[serde(rename = "networkID", deserialize_with = "number_or_string")]
    pub network_id: u32,
    /// Transport encoding for the reply payload and for every memo.
    #[serde(default)]
    pub encoding: Encoding,
    /// Asset alias -> definition.
    pub genesis_data: BTreeMap<String, AssetDefinition>,
}

impl BuildGenesisArgs {
    pub fn new(network_id: u32, encoding: Encoding) -> Self {
        Self {
            network_id,
            encoding,
            genesis_data: BTreeMap::new(),
        }
    }

    pub fn with_asset(mut self, alias: impl Into<String>, definition: AssetDefinition) -> Self {
        self.genesis_data.insert(alias.into(), definition);
        self
    }
}

/// The encoded genesis payload and the encoding it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildGenesisReply {
    pub bytes: String,
    pub encoding: Encoding,
}

/// Genesis construction API (Driving Port)
///
/// Every method is pure and synchronous. Any error means no genesis was
/// produced.
pub trait GenesisApi: Send + Sync {
    /// Full pipeline: assemble, encode, then render as text.
    fn build_genesis(&self, args: &BuildGenesisArgs) -> Result<BuildGenesisReply, GenesisError>;

    /// Resolve, type and canonically order every asset.
    fn assemble_genesis(&self, args: &BuildGenesisArgs) -> Result<Genesis, GenesisError>;

    /// Versioned binary encoding of an assembled genesis.
    fn encode_genesis(&self, genesis: &Genesis) -> Result<Vec<u8>, GenesisError>;

    /// Decode canonical genesis bytes.
    ///
    /// Fails if the bytes decode but are not in canonical order, since such a
    /// payload could never have been produced by `encode_genesis`.
    fn decode_genesis(&self, bytes: &[u8]) -> Result<Genesis, GenesisError>;
}
