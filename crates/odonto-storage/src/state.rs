use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects::{self, Precondition};

/// Load a JSON state file from S3. Returns the deserialized value and its ETag.
pub async fn load_state<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(T, String), StorageError> {
    let output = objects::get_object(client, bucket, key).await?;
    let value: T = serde_json::from_slice(&output.body)?;
    let etag = output.etag.unwrap_or_default();
    Ok((value, etag))
}

/// Like [`load_state`], but a missing object is `None` instead of an error.
pub async fn load_state_optional<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<(T, String)>, StorageError> {
    match load_state(client, bucket, key).await {
        Ok(loaded) => Ok(Some(loaded)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON state file to S3 with ETag optimistic locking.
pub async fn save_state_if_match<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    expected_etag: &str,
) -> Result<String, StorageError> {
    save_state_conditional(client, bucket, key, value, Precondition::Matches(expected_etag)).await
}

/// Create a JSON state file; fails if another writer created it first.
pub async fn save_state_if_absent<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    save_state_conditional(client, bucket, key, value, Precondition::Absent).await
}

async fn save_state_conditional<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    precondition: Precondition<'_>,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object_conditional(
        client,
        bucket,
        key,
        body,
        Some("application/json"),
        precondition,
    )
    .await
}
