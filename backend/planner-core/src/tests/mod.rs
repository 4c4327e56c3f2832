mod credential;
mod error;
mod gemini_client;
mod pipeline;
