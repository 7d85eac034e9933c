pub mod db;
pub mod public;
mod router;
mod user;
pub use router::router;
pub use user::CurrentUser;
