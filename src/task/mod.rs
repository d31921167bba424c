mod model;
mod routes;

pub use model::Task;
pub use model::TaskFC;
pub use routes::router;

pub const TASK_PK: &str = "Task";
