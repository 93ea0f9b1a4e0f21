//! # Failure Handling
//!
//! Every failure aborts the whole build and names the asset involved.

#[cfg(test)]
mod tests {
    use genesis_builder::test_utils::{address_for, corrupt_checksum, fixed_cap, test_address};
    use genesis_builder::{
        AddressError, AssetDefinition, AssetKind, BuildGenesisArgs, EncodingError, GenesisApi,
        GenesisConfigBuilder, GenesisError, GenesisService,
    };
    use serde_json::json;
    use shared_codec::CodecError;
    use shared_types::{Encoding, FormattingError};

    fn service() -> GenesisService {
        GenesisService::new().unwrap()
    }

    fn valid(symbol: &str) -> AssetDefinition {
        AssetDefinition::new("Valid", symbol, 0)
            .with_records("fixedCap", vec![fixed_cap(&test_address(1), 10)])
    }

    #[test]
    fn test_bad_checksum_aborts_whole_build() {
        let bad = AssetDefinition::new("Bad", "BAD", 0).with_records(
            "fixedCap",
            vec![fixed_cap(&corrupt_checksum(&test_address(2)), 10)],
        );
        let args = BuildGenesisArgs::new(1, Encoding::Hex)
            .with_asset("good", valid("GUD"))
            .with_asset("bad", bad);

        match service().build_genesis(&args) {
            Err(GenesisError::AddressFormat {
                alias,
                source: AddressError::InvalidBech32 { .. },
            }) => assert_eq!(alias, "bad"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_length_address_rejected() {
        let args = BuildGenesisArgs::new(1, Encoding::Hex).with_asset(
            "short",
            AssetDefinition::new("Short", "SRT", 0)
                .with_records("fixedCap", vec![fixed_cap(&address_for(&[1; 19]), 1)]),
        );
        assert!(matches!(
            service().build_genesis(&args),
            Err(GenesisError::AddressFormat {
                source: AddressError::InvalidLength { length: 19, .. },
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let args = BuildGenesisArgs::new(1, Encoding::Cb58)
            .with_asset("good", valid("GUD"))
            .with_asset(
                "odd",
                AssetDefinition::new("Odd", "ODD", 0).with_records("unknown", vec![json!({})]),
            );
        assert_eq!(
            service().build_genesis(&args),
            Err(GenesisError::UnknownAssetType {
                alias: "odd".to_string(),
                asset_type: "unknown".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed_minters_rejected() {
        let args = BuildGenesisArgs::new(1, Encoding::Cb58).with_asset(
            "mint",
            AssetDefinition::new("Mint", "MNT", 0)
                .with_records("variableCap", vec![json!({"minters": "not a list"})]),
        );
        assert!(matches!(
            service().build_genesis(&args),
            Err(GenesisError::MalformedRecord {
                kind: AssetKind::VariableCap,
                index: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_first_error_is_deterministic() {
        // Both assets are broken; "a" sorts first in the input map.
        let args = BuildGenesisArgs::new(1, Encoding::Hex)
            .with_asset(
                "b",
                AssetDefinition::new("B", "B", 0).with_records("unknown", vec![]),
            )
            .with_asset(
                "a",
                AssetDefinition::new("A", "A", 0)
                    .with_records("fixedCap", vec![json!({"amount": 1})]),
            );

        for _ in 0..3 {
            assert!(matches!(
                service().build_genesis(&args),
                Err(GenesisError::MalformedRecord { ref alias, .. }) if alias == "a"
            ));
        }
    }

    #[test]
    fn test_cb58_payload_size_limit() {
        // A 16 KiB memo pushes the payload past the cb58 limit; hex has none.
        let memo = shared_types::formatting::encode(Encoding::Hex, &[7u8; 16 * 1024]).unwrap();
        let args = BuildGenesisArgs::new(1, Encoding::Hex)
            .with_asset("big", AssetDefinition::new("Big", "BIG", 0).with_memo(memo));

        let service = service();
        let bytes = service
            .encode_genesis(&service.assemble_genesis(&args).unwrap())
            .unwrap();
        assert!(bytes.len() > 16 * 1024);
        assert!(service.build_genesis(&args).is_ok());

        let text = shared_types::formatting::encode(Encoding::Cb58, &bytes);
        assert!(matches!(text, Err(FormattingError::TooLarge { .. })));
    }

    #[test]
    fn test_slice_limit_surfaces_as_encoding_error() {
        let config = GenesisConfigBuilder::new().max_slice_len(2).build().unwrap();
        let service = GenesisService::with_config(config).unwrap();

        let holders = (1..=3).map(|seed| fixed_cap(&test_address(seed), 1)).collect();
        let args = BuildGenesisArgs::new(1, Encoding::Hex).with_asset(
            "many",
            AssetDefinition::new("Many", "MNY", 0).with_records("fixedCap", holders),
        );

        assert!(matches!(
            service.build_genesis(&args),
            Err(GenesisError::Encoding {
                source: EncodingError::Codec(CodecError::SliceTooLong { len: 3, max: 2 }),
                ..
            })
        ));
    }
}
