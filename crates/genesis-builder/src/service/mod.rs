//! Service Layer
//!
//! `GenesisService` wires the domain rules to the address and transport
//! adapters and implements `GenesisApi`.

pub mod initial_state;

#[cfg(test)]
mod proptests;

use std::sync::Arc;

use shared_codec::{CodecError, CodecManager};
use shared_types::Id;
use tracing::{debug, info, instrument, warn};

use crate::adapters::{Bech32AddressResolver, ChecksummedFormatter};
use crate::codec::genesis_codec_manager;
use crate::domain::{
    ordering, AssetDefinition, Genesis, GenesisAsset, GenesisConfig, GenesisError,
};
use crate::ports::{AddressResolver, BuildGenesisArgs, BuildGenesisReply, GenesisApi, PayloadEncoder};

pub use initial_state::build_initial_states;

/// Identifier of a genesis: SHA-256 of its canonical bytes.
pub fn genesis_id(bytes: &[u8]) -> Id {
    Id::digest(bytes)
}

/// Genesis construction service.
///
/// Holds a fully registered, read-only codec manager; safe to share across
/// threads and to call concurrently.
pub struct GenesisService<R = Bech32AddressResolver, E = ChecksummedFormatter>
where
    R: AddressResolver,
    E: PayloadEncoder,
{
    resolver: R,
    encoder: E,
    manager: Arc<CodecManager>,
    config: GenesisConfig,
}

impl GenesisService {
    /// Service with the production adapters and default configuration.
    pub fn new() -> Result<Self, GenesisError> {
        Self::with_config(GenesisConfig::default())
    }

    pub fn with_config(config: GenesisConfig) -> Result<Self, GenesisError> {
        Self::with_adapters(Bech32AddressResolver, ChecksummedFormatter, config)
    }
}

impl<R: AddressResolver, E: PayloadEncoder> GenesisService<R, E> {
    /// Validate `config` and register the codec once.
    pub fn with_adapters(resolver: R, encoder: E, config: GenesisConfig) -> Result<Self, GenesisError> {
        config.validate()?;
        let manager = genesis_codec_manager(&config)
            .map_err(|e| GenesisError::encoding("registering codec types", e))?;

        Ok(Self {
            resolver,
            encoder,
            manager: Arc::new(manager),
            config,
        })
    }

    pub fn codec_manager(&self) -> Arc<CodecManager> {
        Arc::clone(&self.manager)
    }

    fn build_asset(
        &self,
        args: &BuildGenesisArgs,
        alias: &str,
        definition: &AssetDefinition,
    ) -> Result<GenesisAsset, GenesisError> {
        let memo = self
            .encoder
            .decode(args.encoding, &definition.memo)
            .map_err(|e| GenesisError::encoding(format!("decoding memo of asset {alias:?}"), e))?;

        let states = build_initial_states(alias, &definition.initial_state, &self.resolver)?;

        debug!(alias, states = states.len(), memo_len = memo.len(), "Built genesis asset");

        Ok(GenesisAsset {
            alias: alias.to_string(),
            network_id: args.network_id,
            blockchain_id: Id::EMPTY,
            memo,
            name: definition.name.clone(),
            symbol: definition.symbol.clone(),
            denomination: definition.denomination,
            states,
        })
    }
}

impl<R: AddressResolver, E: PayloadEncoder> GenesisApi for GenesisService<R, E> {
    #[instrument(
        name = "build_genesis",
        skip(self, args),
        fields(network_id = args.network_id, assets = args.genesis_data.len())
    )]
    fn build_genesis(&self, args: &BuildGenesisArgs) -> Result<BuildGenesisReply, GenesisError> {
        let result = self
            .assemble_genesis(args)
            .and_then(|genesis| self.encode_genesis(&genesis))
            .and_then(|bytes| {
                let text = self
                    .encoder
                    .encode(args.encoding, &bytes)
                    .map_err(|e| GenesisError::encoding("formatting genesis payload", e))?;
                Ok((bytes, text))
            });

        match result {
            Ok((bytes, text)) => {
                info!(
                    size = bytes.len(),
                    genesis_id = %genesis_id(&bytes),
                    encoding = %args.encoding,
                    "Built genesis"
                );
                Ok(BuildGenesisReply {
                    bytes: text,
                    encoding: args.encoding,
                })
            }
            Err(e) => {
                warn!(error = %e, "Genesis build failed");
                Err(e)
            }
        }
    }

    fn assemble_genesis(&self, args: &BuildGenesisArgs) -> Result<Genesis, GenesisError> {
        let assets = args
            .genesis_data
            .iter()
            .map(|(alias, definition)| self.build_asset(args, alias, definition))
            .collect::<Result<Vec<_>, _>>()?;

        let txs = ordering::canonicalize_assets(assets, &self.manager, self.config.codec_version)
            .map_err(|e| GenesisError::encoding("sorting genesis", e))?;

        Ok(Genesis { txs })
    }

    fn encode_genesis(&self, genesis: &Genesis) -> Result<Vec<u8>, GenesisError> {
        self.manager
            .marshal(self.config.codec_version, genesis)
            .map_err(|e| GenesisError::encoding("marshaling genesis", e))
    }

    fn decode_genesis(&self, bytes: &[u8]) -> Result<Genesis, GenesisError> {
        let (version, genesis) = self
            .manager
            .unmarshal::<Genesis>(bytes)
            .map_err(|e| GenesisError::encoding("unmarshaling genesis", e))?;

        let canonical = ordering::is_canonical(&genesis.txs, &self.manager, version)
            .map_err(|e| GenesisError::encoding("checking genesis order", e))?;
        if !canonical {
            return Err(GenesisError::encoding(
                "checking genesis order",
                CodecError::InvalidValue("genesis is not in canonical order".to_string()),
            ));
        }

        Ok(genesis)
    }
}
