//! Record Commands
//!
//! Calls into the record library and decodes its scanner result.

use js_sys::{Array, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{init_js, request_records_js};
use crate::error::{js_error_message, RecordsError};
use crate::models::{RecordBatch, RecordQuery};

/// The two entry points the form needs from the record library
#[allow(async_fn_in_trait)]
pub trait RecordLibrary {
    async fn initialize(&self) -> Result<(), RecordsError>;
    async fn request_records(&self, query: &RecordQuery) -> Result<RecordBatch, RecordsError>;
}

/// The wasm-pack package loaded by the page
#[derive(Debug, Clone, Copy, Default)]
pub struct WasmRecordLibrary;

impl RecordLibrary for WasmRecordLibrary {
    async fn initialize(&self) -> Result<(), RecordsError> {
        init_library().await
    }

    async fn request_records(&self, query: &RecordQuery) -> Result<RecordBatch, RecordsError> {
        request_records(query).await
    }
}

/// Settle a call result whether the library returned a value or a promise.
/// A synchronous throw is treated the same as a rejection.
async fn settle(result: Result<JsValue, JsValue>) -> Result<JsValue, JsValue> {
    let value = result?;
    JsFuture::from(Promise::resolve(&value)).await
}

pub async fn init_library() -> Result<(), RecordsError> {
    settle(init_js())
        .await
        .map(|_| ())
        .map_err(|e| RecordsError::Init(js_error_message(&e)))
}

pub async fn request_records(query: &RecordQuery) -> Result<RecordBatch, RecordsError> {
    let result = request_records_js(
        query.private_key.clone(),
        query.view_key.clone(),
        query.start,
        query.end,
        query.last,
        query.endpoint.clone(),
    );
    let value = settle(result)
        .await
        .map_err(|e| RecordsError::Rejected(js_error_message(&e)))?;
    decode_scanner(&value)
}

/// Read `msg` and `records` off the scanner object (both are getters).
pub fn decode_scanner(value: &JsValue) -> Result<RecordBatch, RecordsError> {
    if let Some(text) = value.as_string() {
        return Ok(RecordBatch { records: vec![text] });
    }
    if !value.is_object() {
        return Ok(RecordBatch::default());
    }

    let msg = Reflect::get(value, &JsValue::from_str("msg"))
        .ok()
        .and_then(|m| m.as_string());
    let records = Reflect::get(value, &JsValue::from_str("records"))
        .ok()
        .filter(Array::is_array)
        .map(|list| {
            Array::from(&list)
                .iter()
                .map(|r| r.as_string().unwrap_or_else(|| format!("{:?}", r)))
                .collect()
        })
        .unwrap_or_default();

    RecordBatch::from_scanner(msg, records)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn scanner(msg: &str, records: &[&str]) -> JsValue {
        let obj = Object::new();
        let list = records.iter().map(|r| JsValue::from_str(r)).collect::<Array>();
        Reflect::set(&obj, &"msg".into(), &msg.into()).unwrap();
        Reflect::set(&obj, &"records".into(), &list).unwrap();
        obj.into()
    }

    #[wasm_bindgen_test]
    fn test_decode_successful_scanner() {
        let batch = decode_scanner(&scanner("", &["{owner: a}", "{owner: b}"])).unwrap();
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[0], "{owner: a}");
    }

    #[wasm_bindgen_test]
    fn test_decode_failed_scanner() {
        let err = decode_scanner(&scanner("Invalid block range", &[])).unwrap_err();
        assert_eq!(err, RecordsError::Library("Invalid block range".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_decode_plain_values() {
        let batch = decode_scanner(&JsValue::from_str("record")).unwrap();
        assert_eq!(batch.records, vec!["record".to_string()]);
        assert_eq!(decode_scanner(&JsValue::UNDEFINED).unwrap(), RecordBatch::default());
    }

    #[wasm_bindgen_test]
    async fn test_missing_library_is_an_error() {
        // No `window.wasmLib` in the test page
        assert!(matches!(init_library().await, Err(RecordsError::Init(_))));
    }
}
