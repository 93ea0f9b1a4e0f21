//! # Genesis Records
//!
//! The typed structure that is encoded into the genesis payload:
//!
//! ```text
//! Genesis
//! └── txs: [GenesisAsset]          (sorted by own encoding)
//!     └── states: [InitialState]   (sorted by fx ID)
//!         └── outs: [Output]       (sorted by own encoding)
//! ```

use serde::Serialize;
use shared_codec::{CodecError, LinearCodec, Packer, Serializable, Unpacker};
use shared_types::Id;

use super::outputs::Output;

/// Outputs granted at genesis under one feature extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitialState {
    pub fx_id: u32,
    pub outs: Vec<Output>,
}

impl InitialState {
    pub fn new(fx_id: u32) -> Self {
        Self {
            fx_id,
            outs: Vec::new(),
        }
    }
}

impl Serializable for InitialState {
    fn pack(&self, codec: &LinearCodec, packer: &mut Packer) -> Result<(), CodecError> {
        packer.pack_u32(self.fx_id)?;
        codec.pack_seq(packer, &self.outs)
    }

    fn unpack(codec: &LinearCodec, unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            fx_id: unpacker.unpack_u32()?,
            outs: codec.unpack_seq(unpacker)?,
        })
    }
}

/// The asset-creation transaction for one asset, keyed by its alias.
///
/// Encodes as `alias ‖ base tx ‖ name ‖ symbol ‖ denomination ‖ states`, where
/// the base tx is `network ID ‖ blockchain ID ‖ outputs ‖ inputs ‖ memo`.
/// Genesis transactions never spend or create UTXOs directly, so the base
/// outputs and inputs lists are always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisAsset {
    pub alias: String,
    #[serde(rename = "networkID")]
    pub network_id: u32,
    #[serde(rename = "blockchainID")]
    pub blockchain_id: Id,
    #[serde(with = "hex::serde")]
    pub memo: Vec<u8>,
    pub name: String,
    pub symbol: String,
    pub denomination: u8,
    pub states: Vec<InitialState>,
}

impl GenesisAsset {
    /// Stable sort of the initial states by feature extension ID.
    pub fn sort_states(&mut self) {
        self.states.sort_by_key(|state| state.fx_id);
    }
}

impl Serializable for GenesisAsset {
    fn pack(&self, codec: &LinearCodec, packer: &mut Packer) -> Result<(), CodecError> {
        codec.pack_str(packer, &self.alias)?;
        packer.pack_u32(self.network_id)?;
        packer.pack_fixed(self.blockchain_id.as_bytes())?;
        codec.pack_len(packer, 0)?; // outputs
        codec.pack_len(packer, 0)?; // inputs
        codec.pack_bytes(packer, &self.memo)?;
        codec.pack_str(packer, &self.name)?;
        codec.pack_str(packer, &self.symbol)?;
        packer.pack_u8(self.denomination)?;
        codec.pack_seq(packer, &self.states)
    }

    fn unpack(codec: &LinearCodec, unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        let alias = codec.unpack_str(unpacker)?;
        let network_id = unpacker.unpack_u32()?;
        let blockchain_id = Id(unpacker.unpack_fixed::<32>()?);

        for list in ["outputs", "inputs"] {
            let len = codec.unpack_len(unpacker)?;
            if len != 0 {
                return Err(CodecError::InvalidValue(format!(
                    "genesis asset {alias:?} carries {len} base {list}"
                )));
            }
        }

        Ok(Self {
            alias,
            network_id,
            blockchain_id,
            memo: codec.unpack_bytes(unpacker)?,
            name: codec.unpack_str(unpacker)?,
            symbol: codec.unpack_str(unpacker)?,
            denomination: unpacker.unpack_u8()?,
            states: codec.unpack_seq(unpacker)?,
        })
    }
}

/// The root object: every genesis asset in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Genesis {
    pub txs: Vec<GenesisAsset>,
}

impl Genesis {
    pub fn asset(&self, alias: &str) -> Option<&GenesisAsset> {
        self.txs.iter().find(|tx| tx.alias == alias)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.txs.iter().map(|tx| tx.alias.as_str())
    }
}

impl Serializable for Genesis {
    fn pack(&self, codec: &LinearCodec, packer: &mut Packer) -> Result<(), CodecError> {
        codec.pack_seq(packer, &self.txs)
    }

    fn unpack(codec: &LinearCodec, unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            txs: codec.unpack_seq(unpacker)?,
        })
    }
}
