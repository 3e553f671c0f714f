mod profile_repo;
mod project_repo;

pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
