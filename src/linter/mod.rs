mod config;
mod context;
mod error;
mod fixer;
mod rule;
mod run;
mod violation;

pub use config::{Config, ConfigBuilder, ConfigBuilderError};
pub use context::{FileRunContext, QueryMatchContext};
pub use error::{FixError, LintError};
pub use fixer::{apply_fixes, Edit, Fix, Fixer};
pub use rule::{Plugin, Rule, RuleListenerQuery, RuleMeta};
pub use run::{parse, run_for_slice, FileRunResult};
pub use violation::{Violation, ViolationWithContext};
