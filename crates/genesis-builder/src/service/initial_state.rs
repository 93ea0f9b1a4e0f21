//! Initial-state construction for one asset definition.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::domain::{
    AssetKind, DistributionRecord, GenesisError, InitialState, MintOutput, Output, TransferOutput,
};
use crate::ports::AddressResolver;

/// Turn an asset's tag -> records map into typed initial states.
///
/// Outputs are grouped by the feature extension of their kind; the returned
/// states are ordered by fx ID. Outputs inside a state are in declaration
/// order and still need canonical sorting. An empty map yields no states.
pub fn build_initial_states<R: AddressResolver + ?Sized>(
    alias: &str,
    initial_state: &BTreeMap<String, Vec<Value>>,
    resolver: &R,
) -> Result<Vec<InitialState>, GenesisError> {
    let mut groups: BTreeMap<u32, InitialState> = BTreeMap::new();

    for (tag, records) in initial_state {
        let kind = AssetKind::from_tag(tag).ok_or_else(|| GenesisError::UnknownAssetType {
            alias: alias.to_string(),
            asset_type: tag.clone(),
        })?;

        let fx_id = kind.fx_id();
        let group = groups
            .entry(fx_id)
            .or_insert_with(|| InitialState::new(fx_id));

        for (index, record) in records.iter().enumerate() {
            let record = DistributionRecord::parse(kind, record).map_err(|reason| {
                GenesisError::MalformedRecord {
                    alias: alias.to_string(),
                    kind,
                    index,
                    reason,
                }
            })?;
            group.outs.push(build_output(alias, record, resolver)?);
        }

        debug!(alias, kind = %kind, fx_id, records = records.len(), "Built initial state records");
    }

    Ok(groups.into_values().collect())
}

fn build_output<R: AddressResolver + ?Sized>(
    alias: &str,
    record: DistributionRecord,
    resolver: &R,
) -> Result<Output, GenesisError> {
    let resolve = |address: &str| {
        resolver
            .resolve(address)
            .map_err(|source| GenesisError::AddressFormat {
                alias: alias.to_string(),
                source,
            })
    };

    match record {
        DistributionRecord::FixedCapHolding { address, amount } => {
            Ok(TransferOutput::new(amount, resolve(&address)?).into())
        }
        DistributionRecord::VariableCapMinters { minters } => {
            let minters = minters
                .iter()
                .map(|address| resolve(address))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MintOutput::new(minters).into())
        }
    }
}
