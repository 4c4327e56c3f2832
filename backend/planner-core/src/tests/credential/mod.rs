mod state;
mod validation;
