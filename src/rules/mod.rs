mod prefer_t_regex;

pub use prefer_t_regex::prefer_t_regex_rule;
