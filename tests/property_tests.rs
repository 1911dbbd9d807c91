use imgpress::{
    bytes_to_kb, compression_ratio, derive_output_path, progress_percent, CompressionRequest,
};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

proptest! {
    #[test]
    fn derive_output_path_invariants(
        stem in "[a-zA-Z0-9_-]{1,20}",
        ext in prop::sample::select(&["jpg", "jpeg", "png", "bmp"])
    ) {
        let input = PathBuf::from(format!("{}.{}", stem, ext));
        let output = derive_output_path(&input);

        prop_assert_ne!(&output, &input);
        let out_ext = output.extension().unwrap().to_string_lossy();
        prop_assert_eq!(out_ext.as_ref(), ext);
        let out_name = output.file_name().unwrap().to_string_lossy();
        let expected_name = format!("{}_compressed.{}", stem, ext);
        prop_assert_eq!(out_name.as_ref(), expected_name.as_str());
    }

    #[test]
    fn derive_output_path_keeps_parent(
        dir in "[a-z]{1,8}",
        stem in "[a-z0-9]{1,12}"
    ) {
        let input = PathBuf::from(format!("{}/{}.png", dir, stem));
        let output = derive_output_path(&input);

        prop_assert_eq!(output.parent().unwrap(), Path::new(&dir));
        let out_ext = output.extension().unwrap().to_string_lossy();
        prop_assert_eq!(out_ext.as_ref(), "png");
    }

    #[test]
    fn compression_ratio_sign_follows_sizes(
        original in 1u64..=10_000_000u64,
        compressed in 0u64..=10_000_000u64
    ) {
        let ratio = compression_ratio(bytes_to_kb(original), bytes_to_kb(compressed));

        if compressed < original {
            prop_assert!(ratio > 0.0);
        } else if compressed == original {
            prop_assert_eq!(ratio, 0.0);
        } else {
            prop_assert!(ratio < 0.0);
        }
    }

    #[test]
    fn request_quality_validation(quality in 0u8..=255u8) {
        let result = CompressionRequest::new(vec![PathBuf::from("a.jpg")], quality);
        if (1..=100).contains(&quality) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn progress_sequence_shape(total in 1usize..=200usize) {
        let sequence: Vec<u8> = (0..total).map(|i| progress_percent(i, total)).collect();

        prop_assert_eq!(sequence.len(), total);
        prop_assert!(sequence.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(*sequence.last().unwrap(), 100u8);
        prop_assert!(sequence.iter().all(|&p| p <= 100));
    }
}
