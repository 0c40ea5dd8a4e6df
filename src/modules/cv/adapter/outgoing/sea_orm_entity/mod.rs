pub mod cvs;
pub mod educations;
pub mod experiences;
pub mod skills;
