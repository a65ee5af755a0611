use super::*;

mod condition_test;
mod line_test;
mod script_test;
