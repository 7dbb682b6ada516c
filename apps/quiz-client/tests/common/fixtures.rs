//! Backend payloads used by the mock server.

use serde_json::{json, Value};

pub const ANIMALS: i64 = 1;
pub const SINGLE_COLUMN: i64 = 2;
pub const NUMBERS: i64 = 3;

/// `GET /vocablist/` body.
pub fn list_summaries() -> Value {
    json!([
        { "id": ANIMALS, "name": "Tiere", "user_id": 1 },
        { "id": SINGLE_COLUMN, "name": "Notizen", "user_id": 1 },
        { "id": NUMBERS, "name": "Zahlen", "user_id": 1 },
    ])
}

/// `GET /vocablist/{id}` body.
pub fn list_detail(id: i64) -> Option<Value> {
    let detail = match id {
        ANIMALS => json!({
            "id": ANIMALS,
            "name": "Tiere",
            "columns": [
                { "id": 1, "name": "Begriff", "is_primary": true },
                { "id": 2, "name": "Englisch" },
                { "id": 3, "name": "Französisch", "is_primary": false },
            ]
        }),
        SINGLE_COLUMN => json!({
            "id": SINGLE_COLUMN,
            "name": "Notizen",
            "columns": [{ "id": 20, "name": "Text", "is_primary": true }]
        }),
        NUMBERS => json!({
            "id": NUMBERS,
            "name": "Zahlen",
            "columns": [
                { "id": 10, "name": "Deutsch" },
                { "id": 11, "name": "Spanisch" },
            ]
        }),
        _ => return None,
    };
    Some(detail)
}

/// `GET /vocab/entries/list/{id}` body.
pub fn entries(id: i64) -> Option<Value> {
    let entries = match id {
        ANIMALS => json!([
            { "id": 1, "field_values": [
                { "column_id": 1, "value": "Hund" },
                { "column_id": 2, "value": "dog" },
                { "column_id": 3, "value": "chien" },
            ]},
            { "id": 2, "field_values": [
                { "column_id": 1, "value": "Katze" },
                { "column_id": 2, "value": "cat" },
                { "column_id": 3, "value": null },
            ]},
            { "id": 3, "field_values": [
                { "column_id": 1, "value": "   " },
                { "column_id": 2, "value": "bird" },
            ]},
        ]),
        SINGLE_COLUMN => json!([
            { "id": 30, "field_values": [{ "column_id": 20, "value": "hello" }] },
        ]),
        NUMBERS => json!([
            { "id": 40, "field_values": [
                { "column_id": 10, "value": "eins" },
                { "column_id": 11, "value": "uno" },
            ]},
        ]),
        _ => return None,
    };
    Some(entries)
}
