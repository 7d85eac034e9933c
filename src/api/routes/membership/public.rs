//! Public types for the membership API
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CancelMembershipRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
