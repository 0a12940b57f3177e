//! Demo host for the `scrollsnap` carousel: a GTK window that renders the
//! panels, forwards pointer and keyboard input, hot-reloads its config file
//! and takes commands from `snapctl` over a Unix socket.

pub mod config;
pub mod events;

pub mod gui {
    pub mod app;
    pub mod deck;
    pub mod theme;
    pub mod window;
}

pub mod sys {
    pub mod runtime;
    pub mod server;
}
