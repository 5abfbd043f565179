use std::future::Future;

use chrono::{DateTime, Utc};

use crate::entities::SqliteStore;
use crate::entities::dao::{ContactRecord, NewContact, contact::format_timestamp};

pub trait ContactStore: Send + Sync + 'static {
    /// Append one submission and return its row id.  Rows are never updated
    /// or deleted.
    fn insert_contact(&self, contact: NewContact) -> impl Future<Output = Result<i64, sqlx::Error>> + Send;

    /// The most recent `limit` submissions, newest first.
    fn list_contacts(&self, limit: i64) -> impl Future<Output = Result<Vec<ContactRecord>, sqlx::Error>> + Send;
}

impl ContactStore for SqliteStore {
    async fn insert_contact(&self, contact: NewContact) -> Result<i64, sqlx::Error> {
        let created_at = format_timestamp(&contact.created_at);
        let result = sqlx::query(
            "INSERT INTO contacts (name, email, phone, message, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.message)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list_contacts(&self, limit: i64) -> Result<Vec<ContactRecord>, sqlx::Error> {
        let rows: Vec<(i64, String, String, String, String, String)> = sqlx::query_as(
            "SELECT id, name, email, phone, message, created_at \
                 FROM contacts ORDER BY id DESC LIMIT ?1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|(id, name, email, phone, message, created_at)| {
                let created_at = created_at
                    .parse::<DateTime<Utc>>()
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
                Ok(ContactRecord {
                    id,
                    name,
                    email,
                    phone,
                    message,
                    created_at,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_owned(),
            email: "a@x.com".to_owned(),
            phone: String::new(),
            message: "Hi".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_then_list_returns_row() {
        let store = SqliteStore::in_memory().await.unwrap();
        let id = store.insert_contact(contact("Alice")).await.unwrap();

        let rows = store.list_contacts(10).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].email, "a@x.com");
        assert_eq!(rows[0].phone, "");
        assert_eq!(rows[0].message, "Hi");
    }

    #[tokio::test]
    async fn created_at_is_stored_as_iso8601_text() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_contact(contact("Alice")).await.unwrap();

        let (raw,): (String,) = sqlx::query_as("SELECT created_at FROM contacts")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert!(raw.ends_with('Z'), "unexpected timestamp {raw}");
        assert!(raw.parse::<DateTime<Utc>>().is_ok());
    }

    #[tokio::test]
    async fn list_is_newest_first_and_limited() {
        let store = SqliteStore::in_memory().await.unwrap();
        for name in ["a", "b", "c"] {
            store.insert_contact(contact(name)).await.unwrap();
        }
        let rows = store.list_contacts(2).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn unparseable_created_at_is_a_decode_error() {
        let store = SqliteStore::in_memory().await.unwrap();
        sqlx::query(
            "INSERT INTO contacts (name, email, phone, message, created_at) \
             VALUES ('a', 'a@x.com', '', 'Hi', 'yesterday')",
        )
        .execute(store.pool())
        .await
        .unwrap();

        let err = store.list_contacts(10).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn duplicate_submissions_are_distinct_rows() {
        let store = SqliteStore::in_memory().await.unwrap();
        let first = store.insert_contact(contact("Alice")).await.unwrap();
        let second = store.insert_contact(contact("Alice")).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(store.list_contacts(10).await.unwrap().len(), 2);
    }
}
