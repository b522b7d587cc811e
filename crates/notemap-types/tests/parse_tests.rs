use notemap_types::*;

#[test]
fn test_model_output_round_trips_to_canonical_json() {
    let raw = r#"
```json
{
  "mindmap": {
    "label": "Geography",
    "children": [
      { "label": "France", "description": "European country" }
    ]
  }
}
```
"#;

    let tree = parse_tree_output(raw).expect("fenced envelope should parse");

    assert_eq!(tree.node_count(), 2);
    insta::assert_json_snapshot!(tree, @r#"
    {
      "label": "Geography",
      "children": [
        {
          "label": "France",
          "description": "European country",
          "children": []
        }
      ]
    }
    "#);
}

#[test]
fn test_deeply_nested_output_is_accepted() {
    let mut raw = String::new();
    for i in 0..40 {
        raw.push_str(&format!(r#"{{"label":"level {}","children":["#, i));
    }
    raw.push_str(r#"{"label":"leaf"}"#);
    for _ in 0..40 {
        raw.push_str("]}");
    }

    let tree = parse_tree_output(&raw).unwrap();
    assert_eq!(tree.depth(), 41);
    assert_eq!(tree.node_count(), 41);
}

fn chain_json(depth: usize) -> String {
    let mut raw = String::new();
    for i in 1..depth {
        raw.push_str(&format!(r#"{{"label":"level {}","children":["#, i));
    }
    raw.push_str(r#"{"label":"leaf"}"#);
    for _ in 1..depth {
        raw.push_str("]}");
    }
    raw
}

#[test]
fn test_nesting_cap_is_max_tree_depth() {
    let tree = parse_tree_output(&chain_json(MAX_TREE_DEPTH)).unwrap();
    assert_eq!(tree.depth(), MAX_TREE_DEPTH);

    assert!(matches!(
        parse_tree_output(&chain_json(MAX_TREE_DEPTH + 1)),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_envelope_nesting_cap_is_one_less() {
    let wrap = |depth| format!(r#"{{"mindmap":{}}}"#, chain_json(depth));

    let tree = parse_tree_output(&wrap(MAX_TREE_DEPTH - 1)).unwrap();
    assert_eq!(tree.depth(), MAX_TREE_DEPTH - 1);

    assert!(matches!(
        parse_tree_output(&wrap(MAX_TREE_DEPTH)),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_missing_label_is_rejected() {
    let result = parse_tree_output(r#"{"children": []}"#);
    assert!(result.is_err());
}
