// Request and response bodies for the library service

use serde::{Deserialize, Serialize};

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorInput {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author_id: i32,
}

/// Body returned by successful DELETE requests
#[derive(Debug, Clone, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// Body returned by every failed request
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
