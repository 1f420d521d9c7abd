//! Trivia questions feature: paginated listing, search, category-filtered
//! listing, creation, and deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Ten-question window over all questions |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question by id |
//! | POST | `/questions/filter` | Case-insensitive substring search |
//! | GET | `/categories/{id}/questions` | All questions of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
