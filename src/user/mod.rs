mod model;
mod routes;

pub use model::LoginFC;
pub use model::User;
pub use model::UserFC;
pub use routes::router;

pub const USER_PK: &str = "User";
