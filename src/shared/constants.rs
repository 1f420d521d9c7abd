/// Fixed window size for paginated question listing
pub const QUESTIONS_PER_PAGE: i64 = 10;
