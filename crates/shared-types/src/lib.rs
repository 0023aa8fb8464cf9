pub mod catalogue;
pub mod framework;
pub mod selection;
pub mod types;

pub use catalogue::{CatalogueDocument, CatalogueSnapshot};
pub use framework::{FrameworkKey, IgLevel};
pub use selection::FrameworkSelection;
pub use types::{
    ControlRef, Frameworks, IndustryRequirement, RelevanceLevel, RequirementGroup,
    UnifiedRequirement,
};
