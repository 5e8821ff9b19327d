//! UpdateStatus command

use crate::context::{BoardContext, UpdateMode};
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::StatusId;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Update a status lane's fields.
///
/// Unset fields are left unchanged; any change refreshes `updated_at`. A
/// missing id is a silent no-op under the default lenient mode and a
/// `StatusNotFound` error under [`UpdateMode::Strict`].
#[derive(Debug, Deserialize)]
pub struct UpdateStatus {
    /// The status id to update
    pub id: StatusId,
    /// New title
    pub title: Option<String>,
    /// New color token
    pub color: Option<String>,
    /// New position value
    pub order: Option<i64>,
}

impl UpdateStatus {
    /// Create a new UpdateStatus command
    pub fn new(id: impl Into<StatusId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            color: None,
            order: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the color token
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the order value
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateStatus {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut status = match ctx.get_status(&self.id).await? {
            Some(status) => status,
            None if ctx.update_mode() == UpdateMode::Lenient => {
                warn!(id = %self.id, "update of missing status ignored");
                return Ok(serde_json::json!({ "updated": false, "id": self.id }));
            }
            None => {
                return Err(BoardError::StatusNotFound {
                    id: self.id.to_string(),
                })
            }
        };

        if let Some(title) = &self.title {
            status.title = title.clone();
        }
        if let Some(color) = &self.color {
            status.color = color.clone();
        }
        if let Some(order) = self.order {
            status.order = order;
        }
        status.touch();

        ctx.write_status(&status).await?;
        Ok(serde_json::to_value(&status)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::status::GetStatus;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(".taskboard"));
        InitBoard::new().execute(&ctx).await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_update_title_only() {
        let (_temp, ctx) = setup().await;

        let before = GetStatus::new("status-1").execute(&ctx).await.unwrap();

        let result = UpdateStatus::new("status-1")
            .with_title("Backlog")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["title"], "Backlog");
        // Untouched fields survive the merge
        assert_eq!(result["color"], before["color"]);
        assert_eq!(result["order"], before["order"]);
        assert_eq!(result["created_at"], before["created_at"]);
        assert_ne!(result["updated_at"], before["updated_at"]);
    }

    #[tokio::test]
    async fn test_lenient_update_missing_is_noop() {
        let (_temp, ctx) = setup().await;

        let result = UpdateStatus::new("ghost")
            .with_title("X")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["updated"], false);
    }

    #[tokio::test]
    async fn test_strict_update_missing_errors() {
        let (_temp, ctx) = setup().await;
        let strict = BoardContext::new(ctx.root()).with_strict_updates();

        let result = UpdateStatus::new("ghost")
            .with_title("X")
            .execute(&strict)
            .await;
        assert!(matches!(result, Err(BoardError::StatusNotFound { .. })));
    }
}
