//! Seeded request generators shared by the integration tests and benches.

use genesis_builder::test_utils::{fixed_cap, test_address, variable_cap};
use genesis_builder::{AssetDefinition, BuildGenesisArgs};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use shared_types::Encoding;

/// Network ID used by every generated request.
pub const TEST_NETWORK_ID: u32 = 12345;

/// Deterministic RNG for a test seed.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A request with `assets` assets, each carrying holders and minters.
pub fn random_request(rng: &mut StdRng, assets: usize, encoding: Encoding) -> BuildGenesisArgs {
    let mut args = BuildGenesisArgs::new(TEST_NETWORK_ID, encoding);
    for i in 0..assets {
        args = args.with_asset(format!("asset{i}"), random_definition(rng, i));
    }
    args
}

/// One definition with 1-4 holders and 0-2 minter records.
pub fn random_definition(rng: &mut StdRng, index: usize) -> AssetDefinition {
    let holders: Vec<Value> = (0..rng.gen_range(1..=4))
        .map(|_| fixed_cap(&test_address(rng.gen()), rng.gen_range(1..=1_000_000)))
        .collect();

    let minters: Vec<Value> = (0..rng.gen_range(0..=2))
        .map(|_| {
            let addresses: Vec<String> = (0..rng.gen_range(1..=3))
                .map(|_| test_address(rng.gen()))
                .collect();
            let refs: Vec<&str> = addresses.iter().map(String::as_str).collect();
            variable_cap(&refs)
        })
        .collect();

    let mut definition = AssetDefinition::new(
        format!("Asset {index}"),
        format!("A{index}"),
        rng.gen_range(0..=18),
    )
    .with_records("fixedCap", holders);
    if !minters.is_empty() {
        definition = definition.with_records("variableCap", minters);
    }
    definition
}

/// Same request with every record list and every minter list permuted.
pub fn shuffled(rng: &mut StdRng, args: &BuildGenesisArgs) -> BuildGenesisArgs {
    let mut shuffled = args.clone();
    for definition in shuffled.genesis_data.values_mut() {
        for records in definition.initial_state.values_mut() {
            records.shuffle(rng);
            for record in records.iter_mut() {
                if let Some(Value::Array(minters)) = record.get_mut("minters") {
                    minters.shuffle(rng);
                }
            }
        }
    }
    shuffled
}
