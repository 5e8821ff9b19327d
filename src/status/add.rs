//! AddStatus command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::Status;
use serde::Deserialize;
use serde_json::Value;

/// Add a new status lane to the board
#[derive(Debug, Deserialize)]
pub struct AddStatus {
    /// The lane title
    pub title: String,
    /// Symbolic color token
    pub color: String,
    /// Optional position; defaults to after all existing lanes
    pub order: Option<i64>,
}

impl AddStatus {
    /// Create a new AddStatus command
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
            order: None,
        }
    }

    /// Set the position in the lane order
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddStatus {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.ensure_directories().await?;

        // Determine order: append after the current maximum
        let order = match self.order {
            Some(order) => order,
            None => {
                let statuses = ctx.read_all_statuses().await?;
                statuses.iter().map(|s| s.order).max().map_or(0, |o| o + 1)
            }
        };

        let status = Status::new(&self.title, &self.color, order);
        ctx.write_status(&status).await?;

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
    async fn test_add_status() {
        let (_temp, ctx) = setup().await;

        let result = AddStatus::new("Blocked", "red").execute(&ctx).await.unwrap();

        assert_eq!(result["title"], "Blocked");
        assert_eq!(result["color"], "red");
        // Appended after the six seeded lanes (orders 0..5)
        assert_eq!(result["order"], 6);
        assert_eq!(result["created_at"], result["updated_at"]);
    }

    #[tokio::test]
    async fn test_add_status_explicit_order() {
        let (_temp, ctx) = setup().await;

        let result = AddStatus::new("Urgent", "rose")
            .with_order(99)
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["order"], 99);
    }
}
