use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_dynamo::{from_item, to_item};
use uuid::Uuid;

use super::TASK_PK;
use crate::auth::TaskScope;
use crate::{AError, AResult, AppState};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub pk: String, // always "Task"
    pub sk: String, // task id, random UUID assigned at creation
    pub title: String,
    pub details: String,
    pub due_date: DateTime<Utc>,
    pub owner: String, // username of the creator, never reassigned
}

#[derive(Debug, Deserialize)]
pub struct TaskFC {
    pub title: String,
    pub details: String,
    pub due_date: DateTime<Utc>,
}

impl Task {
    fn new(task_fc: TaskFC, owner: impl Into<String>) -> Self {
        Task {
            pk: String::from(TASK_PK),
            sk: Uuid::new_v4().to_string(),
            title: task_fc.title,
            details: task_fc.details,
            due_date: task_fc.due_date,
            owner: owner.into(),
        }
    }
}

// DynamoDB handlers
impl Task {
    pub async fn ddb_create(state: &AppState, task_fc: TaskFC, owner: &str) -> AResult<String> {
        let task = Task::new(task_fc, owner);
        let task_id = task.sk.clone();
        let item = to_item(task)?;

        let req = state
            .dynamodb_client
            .put_item()
            .table_name(&state.table_name)
            .set_item(Some(item));

        req.send().await?;
        Ok(task_id)
    }

    // A task outside the caller's scope is reported exactly like a missing
    // one, so callers cannot probe for other users' task ids.
    pub async fn ddb_find(state: &AppState, task_id: &str, scope: &TaskScope) -> AResult<Task> {
        let res = state
            .dynamodb_client
            .get_item()
            .table_name(&state.table_name)
            .key("pk", AttributeValue::S(String::from(TASK_PK)))
            .key("sk", AttributeValue::S(task_id.to_owned()))
            .send()
            .await?;

        let task: Task = match res.item {
            Some(item) => from_item(item)?,
            None => return Err(AError::NotFound),
        };

        if !scope.allows(&task.owner) {
            return Err(AError::NotFound);
        }

        Ok(task)
    }

    pub async fn ddb_update(
        state: &AppState,
        task_id: &str,
        task_fc: TaskFC,
        scope: &TaskScope,
    ) -> AResult<()> {
        let mut found_task = Task::ddb_find(state, task_id, scope).await?;

        // Full replace of the mutable fields; id and owner stay as stored.
        found_task.title = task_fc.title;
        found_task.details = task_fc.details;
        found_task.due_date = task_fc.due_date;

        let item = to_item(found_task)?;
        state
            .dynamodb_client
            .put_item()
            .table_name(&state.table_name)
            .set_item(Some(item))
            .send()
            .await?;
        Ok(())
    }

    pub async fn ddb_delete(state: &AppState, task_id: &str, scope: &TaskScope) -> AResult<()> {
        Task::ddb_find(state, task_id, scope).await?;

        state
            .dynamodb_client
            .delete_item()
            .table_name(&state.table_name)
            .key("pk", AttributeValue::S(String::from(TASK_PK)))
            .key("sk", AttributeValue::S(task_id.to_owned()))
            .send()
            .await?;
        Ok(())
    }
}
