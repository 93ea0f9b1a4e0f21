//! # Canonical Ordering
//!
//! Outputs within an initial state and assets within the genesis are ordered
//! by their own canonical encoding. Equal encodings keep declaration order.
//!
//! The encoding includes the codec version prefix, which is identical for
//! every element of one build and so never changes the relative order.

use shared_codec::{CodecError, CodecManager, Serializable};

use super::genesis::{GenesisAsset, InitialState};

/// Sort `items` ascending by `manager.marshal(version, item)`.
///
/// Each element is encoded exactly once. The sort is stable.
pub fn sort_by_encoding<T: Serializable>(
    items: Vec<T>,
    manager: &CodecManager,
    version: u16,
) -> Result<Vec<T>, CodecError> {
    let mut keyed = items
        .into_iter()
        .map(|item| Ok((manager.marshal(version, &item)?, item)))
        .collect::<Result<Vec<_>, CodecError>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Whether `items` are already in canonical order.
pub fn is_sorted_by_encoding<T: Serializable>(
    items: &[T],
    manager: &CodecManager,
    version: u16,
) -> Result<bool, CodecError> {
    let keys = items
        .iter()
        .map(|item| manager.marshal(version, item))
        .collect::<Result<Vec<_>, CodecError>>()?;
    Ok(keys.windows(2).all(|pair| pair[0] <= pair[1]))
}

/// Put one initial state's outputs into canonical order.
pub fn canonicalize_state(
    state: &mut InitialState,
    manager: &CodecManager,
    version: u16,
) -> Result<(), CodecError> {
    let outs = std::mem::take(&mut state.outs);
    state.outs = sort_by_encoding(outs, manager, version)?;
    Ok(())
}

/// Order the full asset set, after each asset's own contents are canonical.
pub fn canonicalize_assets(
    mut assets: Vec<GenesisAsset>,
    manager: &CodecManager,
    version: u16,
) -> Result<Vec<GenesisAsset>, CodecError> {
    for asset in &mut assets {
        for state in &mut asset.states {
            canonicalize_state(state, manager, version)?;
        }
        asset.sort_states();
    }
    sort_by_encoding(assets, manager, version)
}

/// Whether a decoded asset list satisfies every ordering rule.
pub fn is_canonical(
    assets: &[GenesisAsset],
    manager: &CodecManager,
    version: u16,
) -> Result<bool, CodecError> {
    for asset in assets {
        if !asset.states.windows(2).all(|pair| pair[0].fx_id <= pair[1].fx_id) {
            return Ok(false);
        }
        for state in &asset.states {
            if !state.outs.iter().all(|out| out.owners().is_sorted()) {
                return Ok(false);
            }
            if !is_sorted_by_encoding(&state.outs, manager, version)? {
                return Ok(false);
            }
        }
    }
    is_sorted_by_encoding(assets, manager, version)
}
