//! GetStatus command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::StatusId;
use serde::Deserialize;
use serde_json::Value;

/// Get a single status lane by id
#[derive(Debug, Deserialize)]
pub struct GetStatus {
    /// The status id to fetch
    pub id: StatusId,
}

impl GetStatus {
    /// Create a new GetStatus command
    pub fn new(id: impl Into<StatusId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetStatus {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let status = ctx.read_status(&self.id).await?;
        Ok(serde_json::to_value(&status)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(".taskboard"));
        InitBoard::new().execute(&ctx).await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_get_seeded_status() {
        let (_temp, ctx) = setup().await;

        let result = GetStatus::new("status-1").execute(&ctx).await.unwrap();
        assert_eq!(result["title"], "Todo");
        assert_eq!(result["order"], 0);
    }

    #[tokio::test]
    async fn test_get_missing_status() {
        let (_temp, ctx) = setup().await;

        let result = GetStatus::new("nope").execute(&ctx).await;
        assert!(matches!(result, Err(BoardError::StatusNotFound { .. })));
    }
}
