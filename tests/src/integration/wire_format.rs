//! # Wire Format
//!
//! Byte-level layout of a complete payload and its round trip.

#[cfg(test)]
mod tests {
    use genesis_builder::test_utils::{fixed_cap, test_address, variable_cap};
    use genesis_builder::{
        genesis_id, AssetDefinition, BuildGenesisArgs, GenesisApi, GenesisService,
    };
    use shared_types::{formatting, Encoding, Id};

    use crate::fixtures::{random_request, rng};

    fn service() -> GenesisService {
        GenesisService::new().unwrap()
    }

    #[test]
    fn test_single_holder_payload_layout() {
        let args = BuildGenesisArgs::new(5, Encoding::Hex).with_asset(
            "x",
            AssetDefinition::new("X", "X", 3)
                .with_records("fixedCap", vec![fixed_cap(&test_address(0xAB), 1_000)]),
        );
        let reply = service().build_genesis(&args).unwrap();
        let bytes = formatting::decode(Encoding::Hex, &reply.bytes).unwrap();

        let mut expected = vec![0, 0]; // codec version
        expected.extend_from_slice(&[0, 0, 0, 1]); // asset count
        expected.extend_from_slice(&[0, 1, b'x']);
        expected.extend_from_slice(&5u32.to_be_bytes());
        expected.extend_from_slice(&[0; 32]); // blockchain ID
        expected.extend_from_slice(&[0; 4]); // outputs
        expected.extend_from_slice(&[0; 4]); // inputs
        expected.extend_from_slice(&[0; 4]); // memo
        expected.extend_from_slice(&[0, 1, b'X']);
        expected.extend_from_slice(&[0, 1, b'X']);
        expected.push(3);
        expected.extend_from_slice(&[0, 0, 0, 1]); // states
        expected.extend_from_slice(&[0, 0, 0, 0]); // fx ID
        expected.extend_from_slice(&[0, 0, 0, 1]); // outputs
        expected.extend_from_slice(&[0, 0, 0, 7]); // TransferOutput
        expected.extend_from_slice(&1_000u64.to_be_bytes());
        expected.extend_from_slice(&0u64.to_be_bytes());
        expected.extend_from_slice(&1u32.to_be_bytes());
        expected.extend_from_slice(&1u32.to_be_bytes());
        expected.extend_from_slice(&[0xAB; 20]);

        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_mint_output_type_id() {
        let args = BuildGenesisArgs::new(5, Encoding::Hex).with_asset(
            "m",
            AssetDefinition::new("M", "M", 0).with_records(
                "variableCap",
                vec![variable_cap(&[&test_address(2), &test_address(1)])],
            ),
        );
        let service = service();
        let genesis = service.assemble_genesis(&args).unwrap();
        let bytes = service.encode_genesis(&genesis).unwrap();

        // Tail: type ID 6, locktime, threshold, 2 addresses ascending.
        let mut tail = vec![0, 0, 0, 6];
        tail.extend_from_slice(&0u64.to_be_bytes());
        tail.extend_from_slice(&1u32.to_be_bytes());
        tail.extend_from_slice(&2u32.to_be_bytes());
        tail.extend_from_slice(&[1; 20]);
        tail.extend_from_slice(&[2; 20]);
        assert!(bytes.ends_with(&tail));
    }

    #[test]
    fn test_round_trip_through_text() {
        let mut rng = rng(7);
        for encoding in [Encoding::Cb58, Encoding::Hex] {
            let args = random_request(&mut rng, 3, encoding);
            let service = service();
            let reply = service.build_genesis(&args).unwrap();

            let bytes = formatting::decode(reply.encoding, &reply.bytes).unwrap();
            let decoded = service.decode_genesis(&bytes).unwrap();
            assert_eq!(decoded, service.assemble_genesis(&args).unwrap());
            assert_eq!(service.encode_genesis(&decoded).unwrap(), bytes);
        }
    }

    #[test]
    fn test_genesis_id_is_sha256_of_payload() {
        let mut rng = rng(8);
        let args = random_request(&mut rng, 2, Encoding::Hex);
        let service = service();
        let bytes = service
            .encode_genesis(&service.assemble_genesis(&args).unwrap())
            .unwrap();

        let id = genesis_id(&bytes);
        assert_eq!(id, Id::digest(&bytes));
        assert_ne!(id, Id::EMPTY);
    }

    #[test]
    fn test_empty_genesis_encodes() {
        let args = BuildGenesisArgs::new(1, Encoding::Hex);
        let reply = service().build_genesis(&args).unwrap();
        let bytes = formatting::decode(Encoding::Hex, &reply.bytes).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0]);
    }
}
