//! Public types for the newsletter API
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSection {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Newsletter {
    pub month: String,
    pub title: String,
    pub subtitle: String,
    pub introduction: String,
    pub sections: Vec<NewsletterSection>,
    pub citation: String,
    pub verification_hash: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsletterLog {
    pub id: i64,
    pub user_email: String,
    pub sent_at: String,
    pub status: String,
}
