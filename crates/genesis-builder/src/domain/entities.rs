//! # Domain Entities
//!
//! Caller-supplied asset definitions and their loosely-typed distribution
//! records, plus the closed set of supported asset kinds.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Feature extension ID of the secp256k1 output family.
pub const SECP256K1_FX_ID: u32 = 0;

/// Supported asset kinds, keyed in the initial-state map by their tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    /// Supply fixed at genesis: funds go straight to holders.
    FixedCap,
    /// Mintable later: minting rights go to a set of minters.
    VariableCap,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::FixedCap, AssetKind::VariableCap];

    pub const fn tag(self) -> &'static str {
        match self {
            AssetKind::FixedCap => "fixedCap",
            AssetKind::VariableCap => "variableCap",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Feature extension whose outputs this kind produces.
    ///
    /// Every kind currently maps to the secp256k1 extension. A second
    /// extension for an existing kind would need a way for the definition to
    /// choose between them, which the input format does not have.
    pub const fn fx_id(self) -> u32 {
        match self {
            AssetKind::FixedCap => SECP256K1_FX_ID,
            AssetKind::VariableCap => SECP256K1_FX_ID,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One asset as written by a genesis author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDefinition {
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "number_or_string")]
    pub denomination: u8,
    /// Asset-kind tag -> distribution records, still untyped.
    #[serde(default)]
    pub initial_state: BTreeMap<String, Vec<Value>>,
    /// Memo text, in the request's transport encoding.
    #[serde(default)]
    pub memo: String,
}

impl AssetDefinition {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, denomination: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            denomination,
            initial_state: BTreeMap::new(),
            memo: String::new(),
        }
    }

    /// Append records under an asset-kind tag.
    pub fn with_records(mut self, tag: impl Into<String>, records: Vec<Value>) -> Self {
        self.initial_state.entry(tag.into()).or_default().extend(records);
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }
}

/// A distribution record reinterpreted according to its asset kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributionRecord {
    FixedCapHolding { address: String, amount: u64 },
    VariableCapMinters { minters: Vec<String> },
}

#[derive(Deserialize)]
struct Holder {
    #[serde(deserialize_with = "number_or_string")]
    amount: u64,
    address: String,
}

#[derive(Deserialize)]
struct Owners {
    minters: Vec<String>,
}

impl DistributionRecord {
    /// Reinterpret `record` as the shape `kind` requires.
    ///
    /// Returns a human-readable reason on mismatch.
    pub fn parse(kind: AssetKind, record: &Value) -> Result<Self, String> {
        match kind {
            AssetKind::FixedCap => {
                let holder = Holder::deserialize(record).map_err(|e| e.to_string())?;
                Ok(DistributionRecord::FixedCapHolding {
                    address: holder.address,
                    amount: holder.amount,
                })
            }
            AssetKind::VariableCap => {
                let owners = Owners::deserialize(record).map_err(|e| e.to_string())?;
                if owners.minters.is_empty() {
                    return Err("minters must not be empty".to_string());
                }
                Ok(DistributionRecord::VariableCapMinters {
                    minters: owners.minters,
                })
            }
        }
    }
}

/// Unsigned integers arrive either as JSON numbers or as quoted decimals.
///
/// Quoted text must be plain ASCII digits that fit the target width: no
/// sign, no surrounding whitespace.
pub(crate) fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => {
            if text.starts_with('+') {
                return Err(de::Error::custom(format!(
                    "invalid number {text:?}: sign not allowed"
                )));
            }
            text.parse()
                .map_err(|e| de::Error::custom(format!("invalid number {text:?}: {e}")))
        }
    }
}
