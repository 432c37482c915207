use serde::{Deserialize, Serialize};

/// Declared user attributes supplied by the profile provider. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub industry: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub team_size: Option<u32>,
    pub pain_points: Vec<String>,
}
