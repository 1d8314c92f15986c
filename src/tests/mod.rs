pub mod helpers;
mod scope_analysis;
