mod auth_shell;
mod footer;
mod google_button;
mod header;
mod page_hero;
mod pending;

pub use auth_shell::AuthShell;
pub use footer::Footer;
pub use google_button::GoogleButton;
pub use header::Header;
pub use page_hero::PageHero;
pub use pending::SessionPending;
