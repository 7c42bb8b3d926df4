pub mod client;

pub use client::DeezerClient;
