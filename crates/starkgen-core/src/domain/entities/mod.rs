pub mod feature_config;
pub mod project;
pub mod scaffold;
pub mod test_template;

pub use feature_config::FeatureConfiguration;
pub use project::{ContractRequest, PlannedContract, ProjectRequest};
pub use scaffold::GeneratedScaffold;
pub use test_template::{
    ARGUMENTS_PLACEHOLDER, DECLARATIONS_PLACEHOLDER, RenderedTestFile, TemplateSource, TestTemplate,
};
