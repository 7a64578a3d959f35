use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn healthy() -> Self { Self { status: "healthy" } }
}

/// Body of `GET /`.
#[derive(Serialize, Deserialize, Debug)]
pub struct RootMessage {
    pub message: &'static str,
}

impl Default for RootMessage {
    fn default() -> Self { Self { message: "Settings Management System API" } }
}
