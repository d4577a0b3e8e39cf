use std::fmt;

use crate::error::ForgeError;

/// The `<entity>/<repo>` pair a repository page path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoute {
    pub entity: String,
    pub repo: String,
}

impl RepoRoute {
    /// Split a page path of the form `/<entity>/<repo>`.
    pub fn from_path(path: impl AsRef<str>) -> Result<RepoRoute, ForgeError> {
        let path = path.as_ref();
        let mut segments = path.strip_prefix('/').unwrap_or(path).split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(entity), Some(repo), None) if !entity.is_empty() && !repo.is_empty() => {
                Ok(RepoRoute {
                    entity: entity.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ForgeError::invalid_page_route(path)),
        }
    }
}

impl fmt::Display for RepoRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.entity, self.repo)
    }
}
