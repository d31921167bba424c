use super::token::{Claims, Role};

/// Access scope applied to every task-store lookup, re-derived from the
/// caller's verified claims on each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskScope {
    /// Admin callers query by task id alone.
    Any,
    /// Standard callers only see tasks they own.
    Owner(String),
}

impl TaskScope {
    pub fn for_caller(claims: &Claims) -> Self {
        match claims.role {
            Role::Admin => TaskScope::Any,
            Role::Standard => TaskScope::Owner(claims.sub.clone()),
        }
    }

    pub fn allows(&self, owner: &str) -> bool {
        match self {
            TaskScope::Any => true,
            TaskScope::Owner(username) => username == owner,
        }
    }
}
