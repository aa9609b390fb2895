pub mod domain;
pub mod experience;
pub mod format;
pub mod recommendations;
pub mod scoring;
pub mod semantic;
pub mod similarity;
pub mod skills;
pub mod weights;
