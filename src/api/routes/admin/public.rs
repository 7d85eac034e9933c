//! Public types for the admin API
pub use crate::api::routes::events::public::Event;
pub use crate::api::routes::holidays::public::Holiday;
pub use crate::api::routes::newsletter::public::NewsletterLog;

pub type AdminEventsResponse = Vec<Event>;
pub type AdminHolidaysResponse = Vec<Holiday>;
pub type NewsletterLogsResponse = Vec<NewsletterLog>;
