#![allow(non_snake_case)]

use super::*;
use datapack_core::{AnnotatedError, DataPackError};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

impl PayloadShape for User {}

fn user(id: u64) -> User {
    User {
        id,
        name: format!("user-{id}"),
    }
}

fn as_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

// Error packing

#[test]
fn DataPackager___pack_error___sets_single_error_block() {
    let packager = DataPackager::new();

    let text = packager.pack_error("disk full", Some(507)).unwrap();
    let value = as_json(&text);

    assert_eq!(value["error"]["errorNo"], json!(507));
    assert_eq!(value["error"]["hasError"], json!(true));
    assert_eq!(value["error"]["isMultiError"], json!(false));
    assert_eq!(value["error"]["message"], json!("disk full"));
    assert_eq!(value["error"]["multiMessage"], json!([]));
    assert_eq!(value["data"], Value::Null);
}

#[test]
fn DataPackager___pack_error___default_code_is_999() {
    let packager = DataPackager::new();

    let text = packager.pack_error("oops", None).unwrap();

    assert_eq!(packager.get_package_error_info(&text).unwrap().error_no, 999);
}

#[test]
fn DataPackager___pack_error___leaves_metadata_at_defaults() {
    let packager = DataPackager::new();

    let text = packager.pack_error("oops", None).unwrap();
    let value = as_json(&text);

    assert_eq!(value["info"]["dataType"], json!(0));
    assert_eq!(
        packager.get_package_page_info(&text).unwrap(),
        PageInfo::default()
    );
}

#[test]
fn DataPackager___pack_error_from___plain_cause_matches_message_form() {
    let packager = DataPackager::new();
    let cause = AnnotatedError::new("not allowed");

    let from_cause = packager.pack_error_from(&cause, Some(403)).unwrap();
    let from_message = packager.pack_error("not allowed", Some(403)).unwrap();

    assert_eq!(from_cause, from_message);
}

#[test]
fn DataPackager___pack_error_from___annotated_cause_builds_multi_error() {
    let packager = DataPackager::new();
    let cause = AnnotatedError::new("ignored").with("a", 1).with("b", 2);

    let text = packager.pack_error_from(&cause, None).unwrap();
    let error = packager.get_package_error_info(&text).unwrap();

    assert!(error.has_error);
    assert!(error.is_multi_error);
    assert_eq!(error.error_no, 999);
    assert_eq!(error.message, "");
    assert_eq!(
        error.multi_message,
        vec![MultiErrorInfo::new("a", "1"), MultiErrorInfo::new("b", "2")]
    );
}

#[test]
fn DataPackager___pack_error_from___works_with_trait_objects() {
    let packager = DataPackager::new();
    let cause: Box<dyn ErrorAnnotations> = Box::new(DataPackError::Config("bad".into()));

    let text = packager.pack_error_from(cause.as_ref(), Some(7)).unwrap();
    let error = packager.get_package_error_info(&text).unwrap();

    assert_eq!(error.message, "configuration error: bad");
    assert_eq!(error.error_no, 7);
}

// Single payload packing

#[test]
fn DataPackager___pack_it___record_is_tagged_as_object() {
    let packager = DataPackager::new();

    let text = packager.pack_it(Some(&user(1))).unwrap();
    let value = as_json(&text);

    assert_eq!(value["info"]["dataType"], json!(0));
    assert_eq!(value["error"]["hasError"], json!(false));
    assert_eq!(value["error"]["errorNo"], json!(0));
    assert_eq!(value["data"], json!({"id": 1, "name": "user-1"}));
}

#[test]
fn DataPackager___pack_it___scalar_is_tagged_as_value() {
    let packager = DataPackager::new();

    let text = packager.pack_it(Some(&42i64)).unwrap();
    let value = as_json(&text);

    assert_eq!(value["info"]["dataType"], json!(3));
    assert_eq!(value["data"], json!(42));
}

#[test]
fn DataPackager___pack_it___str_slice_is_tagged_as_object() {
    let packager = DataPackager::new();

    let text = packager.pack_it(Some("hello")).unwrap();

    assert_eq!(as_json(&text)["info"]["dataType"], json!(0));
    assert_eq!(packager.unpack_it::<String>(&text).unwrap(), "hello");
}

#[test]
fn DataPackager___pack_it___owned_string_is_tagged_as_object() {
    let packager = DataPackager::new();

    let text = packager.pack_it(Some(&String::from("hello"))).unwrap();
    let value = as_json(&text);

    assert_eq!(value["info"]["dataType"], json!(0));
    assert_eq!(value["data"], json!("hello"));
}

#[test]
fn DataPackager___pack_it___none_packs_no_data_error() {
    let packager = DataPackager::new();

    let text = packager.pack_it::<User>(None).unwrap();
    let error = packager.get_package_error_info(&text).unwrap();

    assert!(error.has_error);
    assert_eq!(error.error_no, 999);
    assert_eq!(error.message, "no data found");
}

#[test]
fn DataPackager___pack_it___none_is_independent_of_payload_type() {
    let packager = DataPackager::new();

    let as_user = packager.pack_it::<User>(None).unwrap();
    let as_int = packager.pack_it::<i32>(None).unwrap();
    let as_list = packager.pack_list::<User>(None).unwrap();

    assert_eq!(as_user, as_int);
    assert_eq!(as_user, as_list);
}

#[test]
fn DataPackager___pack_it_paged___zero_page_size_matches_unpaged() {
    let packager = DataPackager::new();
    let page = PageInfo::new(3, 0, 9, 90);

    let paged = packager.pack_it_paged(Some(&user(2)), &page).unwrap();
    let plain = packager.pack_it(Some(&user(2))).unwrap();

    assert_eq!(paged, plain);
}

#[test]
fn DataPackager___pack_it_paged___attaches_page_info() {
    let packager = DataPackager::new();
    let page = PageInfo::new(1, 10, 2, 15);

    let text = packager.pack_it_paged(Some(&user(2)), &page).unwrap();

    assert_eq!(as_json(&text)["info"]["dataType"], json!(2));
    assert_eq!(packager.get_package_page_info(&text).unwrap(), page);
}

#[test]
fn DataPackager___pack_it_paged___none_packs_no_data_error() {
    let packager = DataPackager::new();

    let text = packager
        .pack_it_paged::<User>(None, &PageInfo::new(1, 10, 0, 0))
        .unwrap();

    assert!(packager.get_package_error_info(&text).unwrap().has_error);
}

// List packing

#[test]
fn DataPackager___pack_list___tags_as_list() {
    let packager = DataPackager::new();
    let values = vec![1, 2, 3];

    let text = packager.pack_list(Some(values.as_slice())).unwrap();
    let value = as_json(&text);

    assert_eq!(value["info"]["dataType"], json!(1));
    assert_eq!(value["data"], json!([1, 2, 3]));
    assert_eq!(value["error"]["hasError"], json!(false));
    assert_eq!(packager.unpack_list::<i32>(&text).unwrap(), vec![1, 2, 3]);
}

#[test]
fn DataPackager___pack_list_paged___empty_list_keeps_page_info_verbatim() {
    let packager = DataPackager::new();
    let values: Vec<User> = Vec::new();
    let page = PageInfo::new(1, 10, 0, 0);

    let text = packager.pack_list_paged(Some(values.as_slice()), &page).unwrap();
    let value = as_json(&text);

    assert_eq!(value["info"]["dataType"], json!(2));
    assert_eq!(
        value["info"]["pageInfo"],
        json!({"pageIndex": 1, "pageSize": 10, "pageCount": 0, "totalCount": 0})
    );
    assert_eq!(value["data"], json!([]));
}

#[test]
fn DataPackager___pack_list_paged___zero_page_size_matches_plain_list() {
    let packager = DataPackager::new();
    let values = vec![user(1), user(2)];

    let paged = packager
        .pack_list_paged(Some(values.as_slice()), &PageInfo::new(4, 0, 1, 2))
        .unwrap();
    let plain = packager.pack_list(Some(values.as_slice())).unwrap();

    assert_eq!(paged, plain);
}

// Unpacking

#[test]
fn DataPackager___unpack_it___roundtrips_record() {
    let packager = DataPackager::new();
    let original = user(5);

    let text = packager.pack_it(Some(&original)).unwrap();
    let decoded: User = packager.unpack_it(&text).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn DataPackager___unpack_list_with_page_info___returns_both() {
    let packager = DataPackager::new();
    let values = vec![user(1), user(2)];
    let page = PageInfo::new(2, 2, 3, 6);

    let text = packager.pack_list_paged(Some(values.as_slice()), &page).unwrap();
    let (decoded, decoded_page) = packager.unpack_list_with_page_info::<User>(&text).unwrap();

    assert_eq!(decoded, values);
    assert_eq!(decoded_page, page);
}

#[test]
fn DataPackager___unpack_list_with_page_info___unpaged_list_returns_zero_page() {
    let packager = DataPackager::new();
    let values = vec![1u8, 2];

    let text = packager.pack_list(Some(values.as_slice())).unwrap();
    let (_, page) = packager.unpack_list_with_page_info::<u8>(&text).unwrap();

    assert!(!page.is_paginated());
}

#[test]
fn DataPackager___unpack_envelope___exposes_error_and_data() {
    let packager = DataPackager::new();

    let text = packager.pack_it(Some(&user(9))).unwrap();
    let envelope = packager.unpack_envelope::<User>(&text).unwrap();

    assert!(!envelope.has_error());
    assert_eq!(envelope.info.data_type, DataType::AsObject);
    assert_eq!(envelope.data, user(9));
}

#[test]
fn DataPackager___unpack_it___error_envelope_decodes_as_option_none() {
    let packager = DataPackager::new();

    let text = packager.pack_error("gone", None).unwrap();
    let data: Option<User> = packager.unpack_it(&text).unwrap();

    assert!(data.is_none());
}

#[test]
fn DataPackager___unpack_it___error_envelope_fails_for_required_type() {
    let packager = DataPackager::new();

    let text = packager.pack_error("gone", None).unwrap();
    let result = packager.unpack_it::<User>(&text);

    assert!(matches!(result, Err(DataPackError::Deserialization(_))));
}

#[test]
fn DataPackager___unpack_it___type_mismatch_is_deserialization_error() {
    let packager = DataPackager::new();

    let text = packager.pack_it(Some("not a number")).unwrap();
    let result = packager.unpack_it::<u32>(&text);

    assert!(matches!(result, Err(DataPackError::Deserialization(_))));
}

#[test]
fn DataPackager___unpack_it___malformed_text_is_deserialization_error() {
    let packager = DataPackager::new();

    let result = packager.unpack_it::<User>("{\"error\": ");

    assert!(result.unwrap_err().is_deserialization());
}

#[test]
fn DataPackager___get_package_error_info___malformed_text_fails() {
    let packager = DataPackager::new();

    assert!(packager.get_package_error_info("not json").is_err());
    assert!(packager.get_package_page_info("").is_err());
}

#[test]
fn DataPackager___get_package_page_info___ignores_payload_shape() {
    let packager = DataPackager::new();
    let text = r#"{"error":{},"info":{"dataType":2,"pageInfo":{"pageIndex":1,"pageSize":5,"pageCount":1,"totalCount":3}},"data":{"weird":[true,{"x":null}]}}"#;

    let page = packager.get_package_page_info(text).unwrap();

    assert_eq!(page, PageInfo::new(1, 5, 1, 3));
}

// Configuration

#[test]
fn DataPackager___with_config___uses_configured_defaults() {
    let config = PackagerConfig::new()
        .with_default_error_no(500)
        .with_no_data_message("nothing");
    let packager = DataPackager::with_config(config).unwrap();

    let text = packager.pack_it::<User>(None).unwrap();
    let error = packager.get_package_error_info(&text).unwrap();

    assert_eq!(error.error_no, 500);
    assert_eq!(error.message, "nothing");
}

#[test]
fn DataPackager___with_config___pretty_output_contains_newlines() {
    let packager = DataPackager::with_config(PackagerConfig::new().with_pretty(true)).unwrap();

    let text = packager.pack_it(Some(&1u8)).unwrap();

    assert!(text.contains('\n'));
    assert_eq!(packager.unpack_it::<u8>(&text).unwrap(), 1);
}

#[test]
fn DataPackager___with_config___rejects_empty_no_data_message() {
    let config = PackagerConfig::new().with_no_data_message("");

    let result = DataPackager::with_config(config);

    assert!(matches!(result, Err(DataPackError::Config(_))));
}

#[test]
fn DataPackager___with_codec___rejects_unknown_log_level() {
    let mut config = PackagerConfig::new();
    config.log_level = "loud".to_string();

    let result = DataPackager::with_codec(JsonCodec::new(), config);

    assert!(matches!(result, Err(DataPackError::Config(_))));
}

#[test]
fn DataPackager___with_codec___valid_config___is_accepted() {
    let packager = DataPackager::with_codec(JsonCodec::pretty(), PackagerConfig::new()).unwrap();

    assert!(packager.codec().is_pretty());
}

#[test]
fn DataPackager___global___returns_same_instance() {
    let a = DataPackager::global() as *const DataPackager;
    let b = DataPackager::global() as *const DataPackager;

    assert_eq!(a, b);
}
