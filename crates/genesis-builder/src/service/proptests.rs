//! Property-based tests: the payload never depends on input order.

use proptest::prelude::*;
use serde_json::Value;
use shared_types::Encoding;

use super::GenesisService;
use crate::domain::AssetDefinition;
use crate::ports::{BuildGenesisArgs, GenesisApi};
use crate::test_utils::{fixed_cap, test_address, variable_cap};

fn holders(entries: &[(u8, u64)]) -> Vec<Value> {
    entries
        .iter()
        .map(|(seed, amount)| fixed_cap(&test_address(*seed), *amount))
        .collect()
}

fn minters(seeds: &[u8]) -> Value {
    let addresses: Vec<String> = seeds.iter().map(|seed| test_address(*seed)).collect();
    let refs: Vec<&str> = addresses.iter().map(String::as_str).collect();
    variable_cap(&refs)
}

fn build(holder_records: Vec<Value>, minter_records: Vec<Value>) -> String {
    let args = BuildGenesisArgs::new(42, Encoding::Hex)
        .with_asset(
            "fixed",
            AssetDefinition::new("Fixed", "FIX", 6).with_records("fixedCap", holder_records),
        )
        .with_asset(
            "mintable",
            AssetDefinition::new("Mintable", "MNT", 0).with_records("variableCap", minter_records),
        );

    match GenesisService::new().and_then(|service| service.build_genesis(&args)) {
        Ok(reply) => reply.bytes,
        Err(e) => panic!("build failed: {e}"),
    }
}

fn holders_and_shuffle() -> impl Strategy<Value = (Vec<(u8, u64)>, Vec<(u8, u64)>)> {
    prop::collection::vec((any::<u8>(), any::<u64>()), 0..8)
        .prop_flat_map(|entries| (Just(entries.clone()), Just(entries).prop_shuffle()))
}

fn minters_and_shuffle() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop::collection::btree_set(any::<u8>(), 1..6)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_flat_map(|seeds| (Just(seeds.clone()), Just(seeds).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Permuting fixed-cap holders does not change the payload
    #[test]
    fn test_holder_order_irrelevant((original, shuffled) in holders_and_shuffle()) {
        let minter_record = vec![minters(&[1])];
        prop_assert_eq!(
            build(holders(&original), minter_record.clone()),
            build(holders(&shuffled), minter_record)
        );
    }

    /// Permuting the minters of a record does not change the payload
    #[test]
    fn test_minter_order_irrelevant((original, shuffled) in minters_and_shuffle()) {
        let holder_records = holders(&[(1, 10)]);
        prop_assert_eq!(
            build(holder_records.clone(), vec![minters(&original)]),
            build(holder_records, vec![minters(&shuffled)])
        );
    }

    /// Permuting whole minter records does not change the payload
    #[test]
    fn test_minter_record_order_irrelevant(
        (original, shuffled) in prop::collection::vec(1u8..=255, 1..5)
            .prop_flat_map(|seeds| (Just(seeds.clone()), Just(seeds).prop_shuffle()))
    ) {
        let records = |seeds: &[u8]| seeds.iter().map(|seed| minters(&[*seed])).collect::<Vec<_>>();
        prop_assert_eq!(
            build(Vec::new(), records(&original)),
            build(Vec::new(), records(&shuffled))
        );
    }
}
