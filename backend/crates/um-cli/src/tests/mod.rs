mod client;
mod shortcut;
