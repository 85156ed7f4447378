pub mod import;
pub mod qualifications;
