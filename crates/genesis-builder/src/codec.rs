//! Genesis codec registration.
//!
//! Type IDs are positional: the order of `REGISTERED_TYPES` is part of the
//! wire format and must never change.

use shared_codec::{CodecError, CodecManager, LinearCodec, Registered};

use crate::domain::{GenesisConfig, MintOutput, TransferOutput};

/// Every type the asset ledger codec knows, in registration order.
pub const REGISTERED_TYPES: [&str; 10] = [
    "avm.BaseTx",
    "avm.CreateAssetTx",
    "avm.OperationTx",
    "avm.ImportTx",
    "avm.ExportTx",
    "secp256k1fx.TransferInput",
    MintOutput::TYPE_NAME,
    TransferOutput::TYPE_NAME,
    "secp256k1fx.MintOperation",
    "secp256k1fx.Credential",
];

/// A linear codec with the full type table registered.
pub fn genesis_codec(max_slice_len: usize) -> Result<LinearCodec, CodecError> {
    let mut codec = LinearCodec::new(max_slice_len);
    for name in REGISTERED_TYPES {
        codec.register_type(name)?;
    }
    Ok(codec)
}

/// A manager holding the genesis codec under the configured version.
pub fn genesis_codec_manager(config: &GenesisConfig) -> Result<CodecManager, CodecError> {
    let mut manager = CodecManager::new(config.max_payload_size);
    manager.register_codec(config.codec_version, genesis_codec(config.max_slice_len)?)?;
    Ok(manager)
}
