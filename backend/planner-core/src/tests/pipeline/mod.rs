mod classify;
mod generate;
