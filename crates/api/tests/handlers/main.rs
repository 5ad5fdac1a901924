mod error_handling_test;
mod slot_test;
