mod content;
pub mod db;
pub mod public;
mod router;
pub use content::newsletter_for;
pub use router::router;
