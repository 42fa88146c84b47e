//! In-memory [`DbStore`] for tests.
//!
//! Mimics the hosted service closely enough for the domain layer:
//! server-assigned ids and `created_at` timestamps, equality filters,
//! single-column ordering, and not-found on update/delete of missing
//! rows. A one-shot fault injector covers the remote-failure paths.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;
use shophunt_core::{new_id, now_rfc3339};

use crate::error::DbError;
use crate::traits::{DbStore, Filter, Order};

#[derive(Default)]
pub struct MemStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    fail_next: Mutex<Option<String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next operation fail with a remote error carrying the
    /// given message.
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_string());
    }

    fn take_fault(&self) -> Result<(), DbError> {
        match self.fail_next.lock().unwrap().take() {
            Some(message) => Err(DbError::Remote { status: 500, message }),
            None => Ok(()),
        }
    }
}

/// Stringified view of a column value, so numeric and string ids
/// compare the same way.
fn column_str(row: &Value, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[async_trait::async_trait]
impl DbStore for MemStore {
    async fn select(
        &self,
        table: &str,
        filter: Option<&Filter>,
        order: Option<&Order>,
    ) -> Result<Vec<Value>, DbError> {
        self.take_fault()?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Value> = tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| match filter {
                        Some(f) => column_str(row, &f.column) == f.value,
                        None => true,
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(o) = order {
            rows.sort_by(|a, b| {
                let cmp = column_str(a, &o.column).cmp(&column_str(b, &o.column));
                if o.ascending { cmp } else { cmp.reverse() }
            });
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, mut row: Value) -> Result<Value, DbError> {
        self.take_fault()?;
        let obj = row
            .as_object_mut()
            .ok_or_else(|| DbError::Decode("insert row must be a JSON object".into()))?;
        obj.entry("id").or_insert_with(|| Value::String(new_id()));
        obj.entry("created_at")
            .or_insert_with(|| Value::String(now_rfc3339()));

        let mut tables = self.tables.lock().unwrap();
        tables.entry(table.to_string()).or_default().push(row.clone());
        Ok(row)
    }

    async fn update(&self, table: &str, id: &str, changes: Value) -> Result<Value, DbError> {
        self.take_fault()?;
        let changes = changes
            .as_object()
            .cloned()
            .ok_or_else(|| DbError::Decode("update changes must be a JSON object".into()))?;

        let mut tables = self.tables.lock().unwrap();
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| DbError::NotFound(format!("{table}/{id}")))?;
        let row = rows
            .iter_mut()
            .find(|row| column_str(row, "id") == id)
            .ok_or_else(|| DbError::NotFound(format!("{table}/{id}")))?;

        let obj = row.as_object_mut().expect("stored rows are objects");
        for (key, value) in changes {
            obj.insert(key, value);
        }
        Ok(row.clone())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), DbError> {
        self.take_fault()?;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| DbError::NotFound(format!("{table}/{id}")))?;
        let before = rows.len();
        rows.retain(|row| column_str(row, "id") != id);
        if rows.len() == before {
            return Err(DbError::NotFound(format!("{table}/{id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_assigns_id_and_timestamp() {
        let store = MemStore::new();
        let row = store
            .insert("products", json!({"product_name": "MK-677"}))
            .await
            .unwrap();
        assert!(row.get("id").and_then(Value::as_str).is_some());
        assert!(row.get("created_at").and_then(Value::as_str).is_some());
    }

    #[tokio::test]
    async fn select_filters_and_orders() {
        let store = MemStore::new();
        for (name, pid) in [("Chemyo", "1"), ("Amino Asylum", "1"), ("Other", "2")] {
            store
                .insert("suppliers", json!({"name": name, "product_id": pid}))
                .await
                .unwrap();
        }

        let rows = store
            .select(
                "suppliers",
                Some(&Filter::eq("product_id", "1")),
                Some(&Order::asc("name")),
            )
            .await
            .unwrap();
        let names: Vec<&str> = rows
            .iter()
            .map(|r| r.get("name").and_then(Value::as_str).unwrap())
            .collect();
        assert_eq!(names, vec!["Amino Asylum", "Chemyo"]);
    }

    #[tokio::test]
    async fn update_replaces_columns() {
        let store = MemStore::new();
        let row = store
            .insert("products", json!({"product_name": "RAD140", "category": "SARMs"}))
            .await
            .unwrap();
        let id = row.get("id").and_then(Value::as_str).unwrap().to_string();

        let updated = store
            .update("products", &id, json!({"category": "Peptides"}))
            .await
            .unwrap();
        assert_eq!(updated.get("category").and_then(Value::as_str), Some("Peptides"));
        assert_eq!(updated.get("product_name").and_then(Value::as_str), Some("RAD140"));
    }

    #[tokio::test]
    async fn update_and_delete_missing_rows() {
        let store = MemStore::new();
        store
            .insert("products", json!({"product_name": "YK11"}))
            .await
            .unwrap();

        assert!(matches!(
            store.update("products", "missing", json!({})).await,
            Err(DbError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("products", "missing").await,
            Err(DbError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn numeric_ids_compare_as_strings() {
        let store = MemStore::new();
        store
            .insert("products", json!({"id": 7, "product_name": "YK11"}))
            .await
            .unwrap();
        store.delete("products", "7").await.unwrap();
    }

    #[tokio::test]
    async fn fault_injection_fires_once() {
        let store = MemStore::new();
        store.fail_next("connection reset");

        let err = store.select("products", None, None).await.unwrap_err();
        assert!(matches!(err, DbError::Remote { status: 500, .. }));

        // Next call goes through.
        assert!(store.select("products", None, None).await.unwrap().is_empty());
    }
}
