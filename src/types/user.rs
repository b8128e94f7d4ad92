use serde::{Deserialize, Serialize};

// Registration fields are all optional so a missing key turns into a
// per-field violation instead of a deserialize failure.
#[derive(Serialize, Deserialize, Debug)]
pub struct RRegister {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
