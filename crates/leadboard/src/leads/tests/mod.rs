mod common;

mod analytics;
mod display;
mod inbox;
