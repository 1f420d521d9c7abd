//! Quiz play feature: pick one random question that has not been asked yet,
//! optionally restricted to a category.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next unseen question, or null when exhausted |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
