mod iterator;
mod sweep;
mod utils;
