//! ListUsers, GetCurrentUser and ListAssignees commands

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::User;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the roster in configured order
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ListUsers;

operation!(
    ListUsers,
    verb = "list",
    noun = "users",
    description = "List the user roster"
);

#[async_trait]
impl Execute<BoardContext, BoardError> for ListUsers {
    type Output = Vec<User>;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Vec<User>, BoardError> {
        let value = ctx.read().await.session.roster().to_vec();
        ExecutionResult::Unlogged { value }
    }
}

/// The user currently viewing the board
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GetCurrentUser;

operation!(
    GetCurrentUser,
    verb = "get",
    noun = "user",
    description = "Get the current user"
);

#[async_trait]
impl Execute<BoardContext, BoardError> for GetCurrentUser {
    type Output = User;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<User, BoardError> {
        ExecutionResult::Unlogged {
            value: ctx.current_user().await,
        }
    }
}

/// Names offered by the assignee filter
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ListAssignees;

operation!(
    ListAssignees,
    verb = "list",
    noun = "assignees",
    description = "List the names available to the assignee filter"
);

#[async_trait]
impl Execute<BoardContext, BoardError> for ListAssignees {
    type Output = Vec<String>;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Vec<String>, BoardError> {
        let value = ctx.read().await.session.assignee_options();
        ExecutionResult::Unlogged { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_users() {
        let ctx = BoardContext::with_defaults().unwrap();
        let users = ListUsers.execute(&ctx).await.into_result().unwrap();
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Bob Smith", "Carol Davis"]);
    }

    #[tokio::test]
    async fn test_current_user_defaults_to_first() {
        let ctx = BoardContext::with_defaults().unwrap();
        let user = GetCurrentUser.execute(&ctx).await.into_result().unwrap();
        assert_eq!(user.email, "alice@taskflow.com");
    }

    #[tokio::test]
    async fn test_assignee_options() {
        let ctx = BoardContext::with_defaults().unwrap();
        let names = ListAssignees.execute(&ctx).await.into_result().unwrap();
        assert_eq!(names.len(), 3);
        assert_eq!(names[1], "Bob Smith");
    }
}
