pub mod actions;
pub mod contact;
pub mod data;
pub mod models;

/// Cap on the public winners list returned to non-winners.
pub const WINNERS_PAGE_SIZE: i64 = 20;
