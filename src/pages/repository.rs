use crate::api;
use crate::config::RemoteConfig;
use crate::error::ForgeError;
use crate::model::{PageRequest, RepoRoute};
use crate::view::CommitLogPage;

/// Load the data for a repository's commit log page.
///
/// The displayed revision is the page's `rev` parameter when one is given,
/// otherwise the head of the fetched log. The head commit itself is elided
/// from the returned list, the previous page state already rendered it.
pub async fn load(remote: &RemoteConfig, page: &PageRequest) -> Result<CommitLogPage, ForgeError> {
    let route = RepoRoute::from_path(page.path())?;
    let log = api::client::commits::commit_log(remote, page).await?;
    log::debug!(
        "pages::repository::load {} got {} commits",
        route,
        log.commits.len()
    );

    let revision = match page.rev() {
        Some(rev) => rev,
        None => match log.commits.first() {
            Some(head) => head.commit_id.clone(),
            None => return Err(ForgeError::empty_commit_log(&route)),
        },
    };

    Ok(CommitLogPage {
        revision,
        commits: log.commits.into_iter().skip(1).collect(),
        increment: page.increment(),
    })
}
