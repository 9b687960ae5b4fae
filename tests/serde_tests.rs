use serde::Serialize;
use seqjoin::{
    join_serialize, join_truncated_serialize, to_items, Delimiter, Error, JoinOptions, Strategy,
};

#[derive(Serialize)]
enum Level {
    Debug,
    Info,
    Warn,
}

#[derive(Serialize)]
struct Matrix {
    rows: Vec<Vec<f64>>,
}

#[test]
fn test_join_serialize_heterogeneous_tuple() {
    let text = join_serialize(&(1, "b", 2.5, true), &JoinOptions::prose()).unwrap();
    assert_eq!(text, "1, b, 2.5 and true");
}

#[test]
fn test_join_serialize_enum_variants() {
    let levels = [Level::Debug, Level::Info, Level::Warn];
    let text = join_serialize(&levels, &JoinOptions::prose().quoted()).unwrap();
    assert_eq!(text, "'Debug', 'Info' and 'Warn'");
}

#[test]
fn test_join_serialize_slice() {
    let values: &[i16] = &[-1, 0, 1];
    assert_eq!(
        join_serialize(values, &JoinOptions::new()).unwrap(),
        "-1, 0, 1"
    );
}

#[test]
fn test_join_truncated_serialize() {
    let values: Vec<u32> = (0..100).collect();
    let text = join_truncated_serialize(&values, &JoinOptions::new()).unwrap();
    assert_eq!(text, "0, 1, 2, 3, 4, ..., 97, 98, 99");
}

#[test]
fn test_unsupported_inputs() {
    let matrix = Matrix {
        rows: vec![vec![1.0]],
    };
    assert!(matches!(to_items(&matrix), Err(Error::UnsupportedType(_))));
    assert!(matches!(
        join_serialize(&matrix.rows, &JoinOptions::new()),
        Err(Error::UnsupportedType(_))
    ));
    assert!(matches!(
        join_truncated_serialize(&"scalar", &JoinOptions::new()),
        Err(Error::UnsupportedType(_))
    ));
}

#[test]
fn test_options_config_roundtrip() {
    let options = JoinOptions::prose()
        .quoted()
        .with_delimiter(Delimiter::Custom(" / ".to_string()))
        .with_strategy(Strategy::Explicit)
        .with_limits(4, 2);

    let json = serde_json::to_string(&options).unwrap();
    let back: JoinOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(options, back);
}

#[test]
fn test_options_config_partial_document_uses_defaults() {
    let options: JoinOptions =
        serde_json::from_str(r#"{"delimiter": "pipe", "head": 2}"#).unwrap();
    assert_eq!(options.delimiter, Delimiter::Pipe);
    assert_eq!(options.head, 2);
    assert_eq!(options.tail, 3);
    assert!(!options.quoted);
    assert_eq!(options.strategy, Strategy::Bulk);
}

#[test]
fn test_options_config_rejects_negative_limits() {
    let result: Result<JoinOptions, _> = serde_json::from_str(r#"{"tail": -1}"#);
    assert!(result.is_err());
}
