use pretty_assertions::assert_eq;
use tabular_encoders::preprocessing::{
    normalize, FittedIntegerEncoder, FittedTransformer, IntegerEncoder, OneHotEncoder,
    PreprocessingError, Transformer, NULL_SENTINEL,
};
use tabular_encoders::{Column, ColumnData, ColumnKind, DataFrame};

fn text(values: &[Option<&str>]) -> ColumnData {
    ColumnData::Text(values.iter().map(|v| v.map(str::to_string)).collect())
}

fn passengers() -> DataFrame {
    DataFrame::new(vec![
        Column::text(
            "sex",
            [Some("male"), Some("Female"), Some("FEMALE"), None, Some("male"), Some("female")],
        ),
        Column::float("age", [Some(22.0), Some(38.0), None, Some(35.0), Some(54.0), Some(2.0)]),
        Column::text(
            "embarked",
            [Some("S"), Some("C"), Some("S"), Some("Q"), None, Some("nan")],
        ),
        Column::int("pclass", [Some(3), Some(1), Some(3), Some(1), Some(1), Some(3)]),
    ])
    .unwrap()
}

#[test]
fn color_scenario() {
    let df = DataFrame::new(vec![Column::text(
        "color",
        [Some("Red"), Some("blue"), None, Some("RED")],
    )])
    .unwrap();

    let fitted = IntegerEncoder::new().fit(&df).unwrap();
    let vocab = fitted.vocabulary("color").unwrap();
    assert_eq!(vocab.labels(), &["blue".to_string(), "red".to_string()]);

    let encoded = fitted.transform(&df).unwrap();
    assert_eq!(
        encoded.column("color").unwrap().data(),
        &ColumnData::Int(vec![Some(1), Some(0), Some(-999), Some(1)])
    );

    let restored = fitted.inverse_transform(&encoded).unwrap();
    assert_eq!(
        restored.column("color").unwrap().data(),
        &text(&[Some("red"), Some("blue"), None, Some("red")])
    );
}

#[test]
fn size_scenario() {
    let df = DataFrame::new(vec![Column::text("size", [Some("S"), Some("M"), Some("L")])]).unwrap();

    let encoder = OneHotEncoder::new();
    let encoded = encoder.transform(&df).unwrap();
    assert_eq!(encoded.column_names(), vec!["size_S", "size_M", "size_L"]);

    let rows: Vec<Vec<Option<f64>>> = (0..3)
        .map(|row| {
            encoded
                .columns()
                .iter()
                .map(|c| c.data().f64_at(row))
                .collect()
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            vec![Some(1.0), Some(0.0), Some(0.0)],
            vec![Some(0.0), Some(1.0), Some(0.0)],
            vec![Some(0.0), Some(0.0), Some(1.0)],
        ]
    );

    let restored = encoder.inverse_transform(&encoded).unwrap();
    assert_eq!(restored, df);
}

#[test]
fn integer_codes_are_dense_with_sentinel_for_nulls() {
    let df = passengers();
    let fitted = IntegerEncoder::new().fit(&df).unwrap();
    assert_eq!(fitted.columns(), vec!["sex", "embarked"]);

    let encoded = fitted.transform(&df).unwrap();
    for name in fitted.columns() {
        let k = fitted.vocabulary(name).unwrap().len() as i64;
        let original = df.column(name).unwrap().data();
        let ColumnData::Int(codes) = encoded.column(name).unwrap().data() else {
            panic!("column {} was not integer encoded", name);
        };

        for (row, code) in codes.iter().enumerate() {
            let code = code.expect("sentinel encoding never leaves native nulls");
            let was_null = normalize(original.string_at(row).as_deref()).is_none();
            if was_null {
                assert_eq!(code, NULL_SENTINEL);
            } else {
                assert!((0..k).contains(&code), "code {} out of range for {}", code, name);
            }
        }
    }

    // Non-categorical columns pass through untouched.
    assert_eq!(encoded.column("age"), df.column("age"));
    assert_eq!(encoded.column("pclass"), df.column("pclass"));
}

#[test]
fn integer_round_trip_returns_normalized_labels() {
    let df = passengers();
    let fitted = IntegerEncoder::new().fit(&df).unwrap();
    let restored = fitted
        .inverse_transform(&fitted.transform(&df).unwrap())
        .unwrap();

    for name in fitted.columns() {
        let original = df.column(name).unwrap().data();
        let expected: Vec<Option<String>> = (0..df.n_rows())
            .map(|row| normalize(original.string_at(row).as_deref()))
            .collect();
        assert_eq!(
            restored.column(name).unwrap().data(),
            &ColumnData::Text(expected)
        );
    }
}

#[test]
fn unseen_label_fails_but_seen_labels_never_do() {
    let df = passengers();
    let fitted = IntegerEncoder::new().with_columns(["embarked"]).fit(&df).unwrap();

    let seen = DataFrame::new(vec![Column::text("embarked", [Some("q"), Some("C"), None])]).unwrap();
    assert!(fitted.transform(&seen).is_ok());

    let unseen = DataFrame::new(vec![Column::text("embarked", [Some("X")])]).unwrap();
    assert!(matches!(
        fitted.transform(&unseen),
        Err(PreprocessingError::UnknownCategory { .. })
    ));
}

#[test]
fn one_hot_blocks_sum_to_one_for_non_null_rows() {
    let df = passengers();
    let encoder = OneHotEncoder::new();
    let encoded = encoder.transform(&df).unwrap();

    for name in encoder.resolved_columns().unwrap() {
        let block = encoder.indicator_columns(&encoded, name);
        assert!(!block.is_empty());
        let original = df.column(name).unwrap().data();

        for row in 0..df.n_rows() {
            let sum: f64 = block
                .iter()
                .map(|c| encoded.column(c).unwrap().data().f64_at(row).unwrap())
                .sum();
            let expected = if original.is_null(row) { 0.0 } else { 1.0 };
            assert_eq!(sum, expected, "row {} of {}", row, name);
        }
    }

    for column in encoded.columns() {
        assert_ne!(column.kind(), ColumnKind::Text);
    }
}

#[test]
fn one_hot_round_trip_is_exact_without_nulls() {
    let df = DataFrame::new(vec![
        Column::text("sex", [Some("male"), Some("Female"), Some("male")]),
        Column::int("pclass", [Some(3), Some(1), Some(2)]),
        Column::text("embarked", [Some("S"), Some("C"), Some("Q")]),
    ])
    .unwrap();

    let encoder = OneHotEncoder::new();
    let restored = encoder
        .inverse_transform(&encoder.transform(&df).unwrap())
        .unwrap();

    assert_eq!(restored.column("sex"), df.column("sex"));
    assert_eq!(restored.column("embarked"), df.column("embarked"));
    assert_eq!(restored.column("pclass"), df.column("pclass"));
}

#[test]
fn fitted_encoder_survives_save_and_load() {
    let df = passengers();
    let fitted = IntegerEncoder::new().fit(&df).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("encoder.bin");
    fitted.save_to_file(&path).unwrap();
    let loaded = FittedIntegerEncoder::load_from_file(&path).unwrap();

    let encoded = fitted.transform(&df).unwrap();
    assert_eq!(loaded.transform(&df).unwrap(), encoded);
    assert_eq!(
        loaded.inverse_transform(&encoded).unwrap(),
        fitted.inverse_transform(&encoded).unwrap()
    );
}

#[test]
fn load_from_garbage_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.bin");
    std::fs::write(&path, [0xffu8; 3]).unwrap();
    assert!(FittedIntegerEncoder::load_from_file(&path).is_err());
}
