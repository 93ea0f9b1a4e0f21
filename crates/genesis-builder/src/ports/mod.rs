//! Ports Layer
//!
//! - Driving port (inbound): `GenesisApi`, the build/decode surface
//! - Driven ports (outbound): address text codec and payload text transport

pub mod inbound;
pub mod outbound;

pub use inbound::{BuildGenesisArgs, BuildGenesisReply, GenesisApi};
pub use outbound::{AddressResolver, PayloadEncoder};
