//! Imgur API client.

mod client;
mod dto;

pub use client::ImgurClient;
