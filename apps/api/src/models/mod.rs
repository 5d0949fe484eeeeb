pub mod resume;

pub use resume::{EducationItem, ExperienceItem, ResumeRecord};
