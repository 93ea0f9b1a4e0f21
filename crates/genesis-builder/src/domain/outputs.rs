//! # Outputs
//!
//! Typed secp256k1 outputs produced from distribution records after address
//! resolution. Owner address lists are kept sorted ascending by byte value.

use serde::Serialize;
use shared_codec::{CodecError, LinearCodec, Packer, Registered, Serializable, Unpacker};
use shared_types::ShortId;

/// Threshold written into every genesis output.
pub const GENESIS_THRESHOLD: u32 = 1;

/// Who may spend an output, and from when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputOwners {
    pub locktime: u64,
    pub threshold: u32,
    pub addrs: Vec<ShortId>,
}

impl OutputOwners {
    /// Unlocked, single-signature ownership over `addrs`, sorted.
    pub fn single_signer(addrs: Vec<ShortId>) -> Self {
        let mut owners = Self {
            locktime: 0,
            threshold: GENESIS_THRESHOLD,
            addrs,
        };
        owners.sort();
        owners
    }

    /// Stable ascending sort of the address list.
    pub fn sort(&mut self) {
        self.addrs.sort();
    }

    pub fn is_sorted(&self) -> bool {
        self.addrs.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl Serializable for OutputOwners {
    fn pack(&self, codec: &LinearCodec, packer: &mut Packer) -> Result<(), CodecError> {
        packer.pack_u64(self.locktime)?;
        packer.pack_u32(self.threshold)?;
        codec.pack_len(packer, self.addrs.len())?;
        for addr in &self.addrs {
            packer.pack_fixed(addr.as_bytes())?;
        }
        Ok(())
    }

    fn unpack(codec: &LinearCodec, unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        let locktime = unpacker.unpack_u64()?;
        let threshold = unpacker.unpack_u32()?;
        let len = codec.unpack_len(unpacker)?;
        let mut addrs = Vec::with_capacity(len.min(unpacker.remaining() / ShortId::LEN));
        for _ in 0..len {
            addrs.push(ShortId(unpacker.unpack_fixed::<20>()?));
        }
        Ok(Self {
            locktime,
            threshold,
            addrs,
        })
    }
}

/// Spendable funds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferOutput {
    pub amount: u64,
    pub owners: OutputOwners,
}

impl TransferOutput {
    pub fn new(amount: u64, owner: ShortId) -> Self {
        Self {
            amount,
            owners: OutputOwners::single_signer(vec![owner]),
        }
    }
}

impl Registered for TransferOutput {
    const TYPE_NAME: &'static str = "secp256k1fx.TransferOutput";
}

impl Serializable for TransferOutput {
    fn pack(&self, codec: &LinearCodec, packer: &mut Packer) -> Result<(), CodecError> {
        packer.pack_u64(self.amount)?;
        self.owners.pack(codec, packer)
    }

    fn unpack(codec: &LinearCodec, unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            amount: unpacker.unpack_u64()?,
            owners: OutputOwners::unpack(codec, unpacker)?,
        })
    }
}

/// The right to mint more of a variable-cap asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MintOutput {
    pub owners: OutputOwners,
}

impl MintOutput {
    pub fn new(minters: Vec<ShortId>) -> Self {
        Self {
            owners: OutputOwners::single_signer(minters),
        }
    }
}

impl Registered for MintOutput {
    const TYPE_NAME: &'static str = "secp256k1fx.MintOutput";
}

impl Serializable for MintOutput {
    fn pack(&self, codec: &LinearCodec, packer: &mut Packer) -> Result<(), CodecError> {
        self.owners.pack(codec, packer)
    }

    fn unpack(codec: &LinearCodec, unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            owners: OutputOwners::unpack(codec, unpacker)?,
        })
    }
}

/// An output as stored in an initial state: encoded behind its type ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Output {
    Transfer(TransferOutput),
    Mint(MintOutput),
}

impl Output {
    const EXPECTED: &'static [&'static str] = &[TransferOutput::TYPE_NAME, MintOutput::TYPE_NAME];

    pub fn owners(&self) -> &OutputOwners {
        match self {
            Output::Transfer(out) => &out.owners,
            Output::Mint(out) => &out.owners,
        }
    }
}

impl From<TransferOutput> for Output {
    fn from(out: TransferOutput) -> Self {
        Output::Transfer(out)
    }
}

impl From<MintOutput> for Output {
    fn from(out: MintOutput) -> Self {
        Output::Mint(out)
    }
}

impl Serializable for Output {
    fn pack(&self, codec: &LinearCodec, packer: &mut Packer) -> Result<(), CodecError> {
        match self {
            Output::Transfer(out) => {
                codec.pack_type_id::<TransferOutput>(packer)?;
                out.pack(codec, packer)
            }
            Output::Mint(out) => {
                codec.pack_type_id::<MintOutput>(packer)?;
                out.pack(codec, packer)
            }
        }
    }

    fn unpack(codec: &LinearCodec, unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        match codec.unpack_type_name(unpacker)? {
            name if name == TransferOutput::TYPE_NAME => {
                Ok(Output::Transfer(TransferOutput::unpack(codec, unpacker)?))
            }
            name if name == MintOutput::TYPE_NAME => {
                Ok(Output::Mint(MintOutput::unpack(codec, unpacker)?))
            }
            found => Err(CodecError::UnexpectedType {
                found,
                expected: Self::EXPECTED,
            }),
        }
    }
}
