mod config;
mod epoch;
mod select;
