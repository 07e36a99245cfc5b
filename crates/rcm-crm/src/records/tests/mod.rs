mod common;
mod records;
