mod client;
mod retry;
