pub mod label;
pub mod resolver;
pub mod style;

pub use label::{EmotionLabel, UnknownEmotionLabel};
pub use resolver::{resolve, EmotionTrigger, TriggerTable};
pub use style::StyleTable;
