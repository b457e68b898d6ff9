//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::todo::{NewTodo, Todo, TodoUpdate};
use crate::error::{TodoError, TodoResult};

pub const TITLE_MIN_LENGTH: usize = 3;
pub const DESCRIPTION_MIN_LENGTH: usize = 3;
pub const DESCRIPTION_MAX_LENGTH: usize = 100;
pub const PRIORITY_MIN: i32 = 1;
pub const PRIORITY_MAX: i32 = 5;

/// Create/replace request body. Carries no owner field; the owner always
/// comes from the caller's verified claims.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    pub priority: i32,
    #[serde(default)]
    pub complete: bool,
}

impl TodoRequest {
    pub fn validate(&self) -> TodoResult<()> {
        if self.title.chars().count() < TITLE_MIN_LENGTH {
            return Err(TodoError::Validation(format!(
                "title must be at least {TITLE_MIN_LENGTH} characters"
            )));
        }
        let description_len = self.description.chars().count();
        if !(DESCRIPTION_MIN_LENGTH..=DESCRIPTION_MAX_LENGTH).contains(&description_len) {
            return Err(TodoError::Validation(format!(
                "description must be between {DESCRIPTION_MIN_LENGTH} and {DESCRIPTION_MAX_LENGTH} characters"
            )));
        }
        if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&self.priority) {
            return Err(TodoError::Validation(format!(
                "priority must be between {PRIORITY_MIN} and {PRIORITY_MAX}"
            )));
        }
        Ok(())
    }

    pub fn into_new(self, owner_id: i64) -> NewTodo {
        NewTodo {
            title: self.title,
            description: self.description,
            priority: self.priority,
            complete: self.complete,
            owner_id,
        }
    }

    pub fn into_update(self) -> TodoUpdate {
        TodoUpdate {
            title: self.title,
            description: self.description,
            priority: self.priority,
            complete: self.complete,
        }
    }
}

/// Todo response body
#[derive(Debug, Clone, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            priority: todo.priority,
            complete: todo.complete,
            owner_id: todo.owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> TodoRequest {
        TodoRequest {
            title: "Buy groceries".into(),
            description: "Milk, eggs, bread".into(),
            priority: 3,
            complete: false,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_short_title_rejected() {
        let mut req = valid();
        req.title = "ab".into();
        assert!(matches!(req.validate(), Err(TodoError::Validation(_))));
    }

    #[test]
    fn test_description_bounds() {
        let mut req = valid();
        req.description = "ab".into();
        assert!(req.validate().is_err());

        req.description = "x".repeat(101);
        assert!(req.validate().is_err());

        req.description = "x".repeat(100);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_priority_bounds() {
        let mut req = valid();
        req.priority = 0;
        assert!(req.validate().is_err());
        req.priority = 6;
        assert!(req.validate().is_err());
        req.priority = 1;
        assert!(req.validate().is_ok());
        req.priority = 5;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_owner_always_from_argument() {
        let new = valid().into_new(42);
        assert_eq!(new.owner_id, 42);
    }
}
