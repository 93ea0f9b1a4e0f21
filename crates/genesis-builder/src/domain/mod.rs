//! Domain Layer
//!
//! Pure types and rules for genesis construction. No I/O.

pub mod config;
pub mod entities;
pub mod errors;
pub mod genesis;
pub mod ordering;
pub mod outputs;

pub use config::{GenesisConfig, GenesisConfigBuilder, DEFAULT_CODEC_VERSION};
pub use entities::{AssetDefinition, AssetKind, DistributionRecord, SECP256K1_FX_ID};
pub use errors::{AddressError, EncodingError, GenesisError};
pub use genesis::{Genesis, GenesisAsset, InitialState};
pub use outputs::{MintOutput, Output, OutputOwners, TransferOutput, GENESIS_THRESHOLD};
