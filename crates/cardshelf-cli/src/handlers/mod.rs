pub mod bands;
pub mod check;
pub mod config;
pub mod list;
pub mod watch;
pub mod window;
