// Domain layer - Records, view state and the comment table engine
pub mod comment;
pub mod comment_table;
pub mod errors;
pub mod pagination;
pub mod user;
pub mod view_state;
