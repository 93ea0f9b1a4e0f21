//! # Genesis Builder
//!
//! Converts a set of named asset definitions into one canonical, versioned
//! genesis payload that every participant can recompute byte for byte.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): records, outputs, ordering rules, config
//! - **Ports Layer** (`ports/`)
//!   - `GenesisApi`: driving port (build, assemble, encode, decode)
//!   - `AddressResolver`, `PayloadEncoder`: driven ports
//! - **Adapters Layer** (`adapters/`): bech32 addresses, cb58/hex transport
//! - **Service Layer** (`service/`): `GenesisService` implements `GenesisApi`
//!
//! ## Pipeline
//!
//! ```text
//! definitions -> typed outputs -> canonical order -> bytes -> text
//! ```
//!
//! ## Invariants
//!
//! - The output is a pure function of the input: map iteration order, the
//!   order of records in a list and the order of minters never affect it.
//! - Outputs in a state and assets in the genesis are ordered by their own
//!   encoding; states in an asset by fx ID; owner addresses ascending.
//! - Any error aborts the build. No partial genesis is returned.
//!
//! ## Usage Example
//!
//! ```ignore
//! use genesis_builder::{AssetDefinition, BuildGenesisArgs, GenesisApi, GenesisService};
//! use shared_types::Encoding;
//!
//! let service = GenesisService::new()?;
//! let args = BuildGenesisArgs::new(12345, Encoding::Hex).with_asset(
//!     "gold",
//!     AssetDefinition::new("Gold", "GLD", 9).with_records(
//!         "fixedCap",
//!         vec![serde_json::json!({"address": "local1...", "amount": 1000})],
//!     ),
//! );
//! let reply = service.build_genesis(&args)?;
//! ```

pub mod adapters;
pub mod codec;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::{Bech32AddressResolver, ChecksummedFormatter};
pub use codec::{genesis_codec, genesis_codec_manager, REGISTERED_TYPES};
pub use domain::{
    AddressError, AssetDefinition, AssetKind, EncodingError, Genesis, GenesisAsset,
    GenesisConfig, GenesisConfigBuilder, GenesisError, InitialState, MintOutput, Output,
    OutputOwners, TransferOutput,
};
pub use ports::{AddressResolver, BuildGenesisArgs, BuildGenesisReply, GenesisApi, PayloadEncoder};
pub use service::{genesis_id, GenesisService};
