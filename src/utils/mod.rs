pub mod ast_utils;
pub mod ava_utils;
pub mod regex_utils;
