//! Environment source: PATHY__<SECTION>__<KEY>, e.g. PATHY__TREE__MAX_DEPTH=3

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "PATHY";

/// Add environment overrides to builder. Comma-separated lists are accepted
/// for `tree.ignore_patterns`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("tree.ignore_patterns"),
    )
}
