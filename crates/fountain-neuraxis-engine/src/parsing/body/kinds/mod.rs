pub mod boneyard;
pub mod dialogue;
pub mod notes;
pub mod scene_heading;
pub mod section;
pub mod transition;

pub use boneyard::{Boneyard, BoneyardOpen};
pub use dialogue::{Character, Parenthetical};
pub use notes::{Comment, PageBreak, Synopsis};
pub use scene_heading::{SceneHeading, SceneSig};
pub use section::{SectionHeading, SectionSig};
pub use transition::{ForcedSig, TRANSITIONS, Transition};
