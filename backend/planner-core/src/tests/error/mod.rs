mod gemini;
mod generation;
