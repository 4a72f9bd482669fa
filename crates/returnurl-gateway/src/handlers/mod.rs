mod health;
mod pages;

pub use health::health_handler;
pub use pages::{back_handler, edit_form_handler, edit_submit_handler, page_handler};
