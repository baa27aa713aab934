pub mod admin;
pub mod draw;
pub mod entries;
pub mod health;
pub mod verify;
pub mod winners;

pub use admin::{login_handler, signup_handler};
pub use draw::draw_handler;
pub use entries::{clear_entries_handler, remove_entry_handler, submit_entry_handler};
pub use health::health_handler;
pub use verify::verify_handler;
pub use winners::{list_winners_handler, mark_winner_handler};
