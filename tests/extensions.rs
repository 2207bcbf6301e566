use primext::logger::{LogDevice, Logger};
use primext::path::{with_temp_dir, TempDirOptions};
use primext::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fs;
use std::io::{Cursor, Write};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

#[test]
fn compress_drops_absent_and_empty_elements() {
    let values = vec![json!(1), Value::Null, json!(""), json!(2)];

    assert_eq!(values.compress(), vec![json!(1), json!(2)]);

    let words = vec![Some("a"), None, Some(""), Some("b")];
    assert_eq!(words.compress(), vec![Some("a"), Some("b")]);
}

#[test]
fn deep_merge_combines_nested_objects() {
    let left = object(json!({"a": {"b": 1}}));
    let right = object(json!({"a": {"c": 2}}));

    assert_eq!(
        Value::Object(left.deep_merge(&right)),
        json!({"a": {"b": 1, "c": 2}})
    );
}

#[test]
fn camelcase_converts_snake_case() {
    assert_eq!("this_is_a_test".camelcase(), "ThisIsATest");
}

#[test]
fn touch_creates_missing_file_then_updates_it() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("test.txt");

    path.touch().unwrap();
    assert!(path.is_file());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);

    let before = fs::metadata(&path).unwrap().modified().unwrap();
    let earlier = before - std::time::Duration::from_secs(60);
    path.touch_at(earlier).unwrap();
    assert!(fs::metadata(&path).unwrap().modified().unwrap() < before);
}

#[test]
fn reread_returns_what_was_written() {
    let mut cursor = Cursor::new(Vec::new());
    cursor.write_all(b"This is a test.").unwrap();

    assert_eq!(cursor.reread_string().unwrap(), "This is a test.");
}

#[test]
fn records_merge_and_diff_through_their_members() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        name: String,
        retries: u32,
    }

    impl RecordExt for Settings {}

    let settings = Settings {
        name: "demo".to_string(),
        retries: 1,
    };
    let updated = settings.merge(&json!({"retries": 3})).unwrap();

    assert_eq!(updated.retries, 3);
    assert_eq!(
        Value::Object(settings.diff(&updated).unwrap()),
        json!({"retries": [1, 3]})
    );
}

#[test]
fn temp_dir_work_is_cleaned_up() {
    let parent = tempfile::TempDir::new().unwrap();
    let options = TempDirOptions::default().root(parent.path());

    let written = with_temp_dir(&options, |dir| {
        let file = dir.join("nested/out.txt");
        file.touch_deep().unwrap().puts("done").unwrap();
        fs::read_to_string(&file).unwrap()
    })
    .unwrap();

    assert_eq!(written, "done\n");
    assert_eq!(fs::read_dir(parent.path()).unwrap().count(), 0);
}

#[test]
fn logger_output_can_be_reread() {
    let mut logger = Logger::new(LogDevice::buffer());
    logger.info("Test.").unwrap();

    assert!(logger.reread().unwrap().ends_with("INFO -- : Test.\n"));
}

#[test]
fn helpers_compose_across_types() {
    let names = vec!["alpha_one", "beta_two", "gamma_three"];
    let titles: Vec<String> = names.iter().map(|name| name.titleize()).collect();

    assert!(titles.many());
    assert!("Beta Two".to_string().is_in(&titles));
    assert_eq!(
        titles.to_sentence_with("and", ", "),
        "Alpha One, Beta Two, and Gamma Three"
    );
}
