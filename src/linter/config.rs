use derive_builder::Builder;

/// Which rules to run over a file, and whether to apply their fixes.
#[derive(Builder, Clone, Debug, Default)]
#[builder(default)]
pub struct Config {
    /// Rule names to enable. Empty enables every rule in the plugin.
    #[builder(setter(each = "rule"))]
    pub rules: Vec<String>,
    pub fix: bool,
}
