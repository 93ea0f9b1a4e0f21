//! # Determinism and Order Independence
//!
//! The payload is a pure function of the logical input.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use genesis_builder::test_utils::{fixed_cap, test_address};
    use genesis_builder::{
        AssetDefinition, BuildGenesisArgs, GenesisApi, GenesisService, REGISTERED_TYPES,
    };
    use shared_codec::CodecManager;
    use shared_types::Encoding;

    use crate::fixtures::{random_request, rng, shuffled};

    fn service() -> GenesisService {
        GenesisService::new().unwrap()
    }

    #[test]
    fn test_repeated_builds_identical() {
        let mut rng = rng(1);
        let args = random_request(&mut rng, 6, Encoding::Hex);

        let first = service().build_genesis(&args).unwrap();
        for _ in 0..3 {
            assert_eq!(service().build_genesis(&args).unwrap(), first);
        }
    }

    #[test]
    fn test_shuffled_records_same_bytes() {
        let mut rng = rng(2);
        for _ in 0..10 {
            let args = random_request(&mut rng, 4, Encoding::Cb58);
            let permuted = shuffled(&mut rng, &args);
            assert_eq!(
                service().build_genesis(&args).unwrap(),
                service().build_genesis(&permuted).unwrap()
            );
        }
    }

    #[test]
    fn test_alias_insertion_order_irrelevant() {
        let mut rng = rng(3);
        let args = random_request(&mut rng, 5, Encoding::Hex);

        // Rebuild the map in reverse insertion order.
        let mut reversed = BuildGenesisArgs::new(args.network_id, args.encoding);
        let mut entries: Vec<_> = args.genesis_data.clone().into_iter().collect();
        entries.reverse();
        reversed.genesis_data = entries.into_iter().collect::<BTreeMap<_, _>>();

        assert_eq!(
            service().build_genesis(&args).unwrap(),
            service().build_genesis(&reversed).unwrap()
        );
    }

    #[test]
    fn test_two_asset_ordering_follows_encoding() {
        let definition = |symbol: &str| {
            AssetDefinition::new("Token", symbol, 0)
                .with_records("fixedCap", vec![fixed_cap(&test_address(1), 5)])
        };
        let args = BuildGenesisArgs::new(1, Encoding::Hex)
            .with_asset("alpha", definition("AAA"))
            .with_asset("beta", definition("BBB"));

        let service = service();
        let genesis = service.assemble_genesis(&args).unwrap();

        let manager: std::sync::Arc<CodecManager> = service.codec_manager();
        let encoded: Vec<Vec<u8>> = genesis
            .txs
            .iter()
            .map(|tx| manager.marshal(0, tx).unwrap())
            .collect();
        assert!(encoded[0] < encoded[1]);
        // "beta" has the shorter length prefix.
        assert_eq!(
            genesis.aliases().collect::<Vec<_>>(),
            vec!["beta", "alpha"]
        );
    }

    #[test]
    fn test_codec_table_is_stable() {
        assert_eq!(REGISTERED_TYPES.len(), 10);
        assert_eq!(REGISTERED_TYPES[6], "secp256k1fx.MintOutput");
        assert_eq!(REGISTERED_TYPES[7], "secp256k1fx.TransferOutput");
    }
}
