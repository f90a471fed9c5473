use shapejson::{
    from_str, parse_text, to_string, to_string_pretty, Double, List, Matrix, RValue, Table, Vector,
};

fn flights() -> Table {
    Table::new(vec![
        (
            "carrier".to_string(),
            Vector::from(vec!["UA", "UA", "AA", "B6"]),
        ),
        (
            "flight".to_string(),
            Vector::from(vec![1545, 1714, 1141, 725]),
        ),
        (
            "dep_delay".to_string(),
            Vector::from(vec![Some(2.0), Some(4.0), None, Some(-1.0)]),
        ),
        (
            "dest".to_string(),
            Vector::from(vec![Some("IAH"), Some("IAH"), Some("MIA"), None]),
        ),
    ])
    .unwrap()
}

#[test]
fn test_special_numeric_values() {
    let x = RValue::from(Vector::Double(vec![
        Double::Finite(3.14),
        Double::NA,
        Double::NaN,
        Double::Finite(21.0),
        Double::Infinity,
        Double::NegativeInfinity,
    ]));

    let json = to_string(&x).unwrap();
    println!("Specials: {}", json);
    assert_eq!(json, r#"[3.14,"NA","NaN",21,"Inf","-Inf"]"#);

    let back = from_str(&json).unwrap();
    assert_eq!(back, x);
}

#[test]
fn test_row_major_matrix() {
    let m = Matrix::from_row_major(Vector::from((1..=12).collect::<Vec<i32>>()), 3, 4).unwrap();
    let json = to_string(&RValue::from(m.clone())).unwrap();
    assert_eq!(json, "[[1,2,3,4],[5,6,7,8],[9,10,11,12]]");

    let back = from_str(&json).unwrap();
    let back = back.as_matrix().unwrap();
    assert_eq!(back.nrow(), 3);
    assert_eq!(back.ncol(), 4);
    assert_eq!(back.data(), m.data());
}

#[test]
fn test_table_with_missing_cells() {
    let table = Table::new(vec![
        (
            "foo".to_string(),
            Vector::from(vec![Some(false), Some(true), None, None]),
        ),
        (
            "bar".to_string(),
            Vector::from(vec![Some("Aladdin"), None, None, Some("Mario")]),
        ),
    ])
    .unwrap();
    let value = RValue::from(table);

    let json = to_string(&value).unwrap();
    assert_eq!(
        json,
        r#"[{"foo":false,"bar":"Aladdin"},{"foo":true},{},{"bar":"Mario"}]"#
    );

    let back = from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_flights_table_round_trip() {
    let value = RValue::from(flights());
    let json = to_string(&value).unwrap();
    assert!(json.starts_with(r#"[{"carrier":"UA","flight":1545,"dep_delay":2,"dest":"IAH"}"#));
    // NA cells are omitted from their row
    assert!(json.contains(r#"{"carrier":"AA","flight":1141,"dest":"MIA"}"#));

    let back = from_str(&json).unwrap();
    let table = back.as_table().unwrap();
    assert_eq!(table.nrow(), 4);
    assert_eq!(
        table.column_names().collect::<Vec<_>>(),
        vec!["carrier", "flight", "dep_delay", "dest"]
    );
    // Whole-valued delays come back as integers
    assert_eq!(
        table.column("dep_delay"),
        Some(&Vector::from(vec![Some(2), Some(4), None, Some(-1)]))
    );
    assert_eq!(table.column("dest"), flights().column("dest"));
}

#[test]
fn test_empty_list_and_empty_vector_coincide() {
    let list = to_string(&RValue::from(List::unnamed(vec![]))).unwrap();
    let vector = to_string(&RValue::from(Vector::from(Vec::<f64>::new()))).unwrap();
    assert_eq!(list, "[]");
    assert_eq!(list, vector);
}

#[test]
fn test_encoding_is_idempotent_after_one_round_trip() {
    let values = vec![
        RValue::from(flights()),
        RValue::from(Vector::from(vec![Some(1.5), None, Some(2.25)])),
        RValue::from(List::named(vec![
            ("origin".to_string(), RValue::from(Vector::from(vec!["EWR", "JFK"]))),
            ("n".to_string(), RValue::scalar(vec![336_776])),
            ("empty".to_string(), RValue::Null),
        ])),
        RValue::from(Matrix::new(Vector::from(vec![true, false]), 1, 2).unwrap()),
    ];

    for value in values {
        let first = to_string(&value).unwrap();
        let second = to_string(&from_str(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_pretty_output_decodes_identically() {
    let value = RValue::from(List::named(vec![
        ("flights".to_string(), RValue::from(flights())),
        (
            "hours".to_string(),
            RValue::from(Matrix::from_row_major(Vector::from(vec![5, 6, 7, 8]), 2, 2).unwrap()),
        ),
    ]));

    let compact = to_string(&value).unwrap();
    let pretty = to_string_pretty(&value).unwrap();
    println!("Pretty:\n{}", pretty);

    assert!(pretty.contains('\n'));
    assert_eq!(parse_text(&compact).unwrap(), parse_text(&pretty).unwrap());
    assert_eq!(from_str(&compact).unwrap(), from_str(&pretty).unwrap());
}

#[test]
fn test_output_is_valid_json() {
    let value = RValue::from(List::named(vec![
        ("flights".to_string(), RValue::from(flights())),
        ("note".to_string(), RValue::scalar(vec!["line\nbreak \"quoted\""])),
    ]));
    for json in [to_string(&value).unwrap(), to_string_pretty(&value).unwrap()] {
        let checked: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(checked.is_object());
    }
}

#[test]
fn test_named_list_members() {
    let json = r#"{"year":2013,"origin":["EWR","JFK","LGA"],"cancelled":null}"#;
    let value = from_str(json).unwrap();
    let list = value.as_list().unwrap();
    assert_eq!(list.get("year"), Some(&RValue::scalar(vec![2013])));
    assert_eq!(
        list.get("origin"),
        Some(&RValue::from(Vector::from(vec!["EWR", "JFK", "LGA"])))
    );
    assert_eq!(list.get("cancelled"), Some(&RValue::Null));
    assert_eq!(to_string(&value).unwrap(), r#"{"year":2013,"origin":["EWR","JFK","LGA"],"cancelled":{}}"#);
}

#[test]
fn test_malformed_text() {
    let err = from_str("{\n  \"a\": [1, 2\n}").unwrap_err();
    println!("Error: {}", err);
    assert!(err.is_format());
    assert!(err.to_string().contains("line 3"));
}
