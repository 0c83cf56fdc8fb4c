use crate::error::Result;
use crate::loader::interface::{LoadedTemplate, TemplateLoader};
use log::debug;
use std::path::Path;
use url::Url;

/// Loader for templates from git repositories.
///
/// The repository is cloned into a fresh temporary directory, so repeated
/// runs never collide with an earlier checkout.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
}

impl<S: AsRef<str>> GitLoader<S> {
    pub fn new(repo: S) -> Self {
        Self { repo }
    }

    /// Extracts the repository name from HTTPS and SSH git URLs.
    pub fn extract_repo_name(repo_url: &str) -> String {
        let path_part = match repo_url.rsplit_once(':') {
            Some((_, path)) if !repo_url.contains("://") => path,
            _ => repo_url,
        };
        let name = path_part
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
            .trim_end_matches(".git");

        if name.is_empty() || name.contains('@') || name.contains(':') {
            "template".to_string()
        } else {
            name.to_string()
        }
    }

    /// Determines if a string represents a git repository URL.
    ///
    /// Supports `http(s)://`, `git://`, `ssh://` and `user@host:path` forms.
    pub fn is_git_url(s: &str) -> bool {
        if let Ok(url) = Url::parse(s) {
            return matches!(url.scheme(), "http" | "https" | "git" | "ssh");
        }

        match (s.find('@'), s.rfind(':')) {
            (Some(at_pos), Some(colon_pos)) if colon_pos > at_pos && !s.contains("://") => {
                let user_part = &s[..at_pos];
                let host_part = &s[at_pos + 1..colon_pos];
                let path_part = &s[colon_pos + 1..];
                !user_part.is_empty()
                    && host_part.contains('.')
                    && path_part.contains('/')
            }
            _ => false,
        }
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    fn load(&self) -> Result<LoadedTemplate> {
        let repo_url = self.repo.as_ref();
        let checkout = tempfile::Builder::new().prefix("stencil-template-").tempdir()?;
        let clone_path = checkout.path().join(Self::extract_repo_name(repo_url));

        debug!("Cloning repository '{repo_url}' to '{}'.", clone_path.display());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
                let home = std::env::var("HOME").unwrap_or_default();
                return git2::Cred::ssh_key(
                    username,
                    None,
                    &Path::new(&home).join(".ssh").join("id_rsa"),
                    None,
                );
            }
            git2::Cred::default()
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        builder.clone(repo_url, &clone_path)?;

        Ok(LoadedTemplate::checkout(checkout, clone_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_git_urls() {
        assert!(GitLoader::<&str>::is_git_url("https://github.com/acme/backend-template"));
        assert!(GitLoader::<&str>::is_git_url("git://example.org/acme/template.git"));
        assert!(GitLoader::<&str>::is_git_url("ssh://git@github.com/acme/template"));
        assert!(GitLoader::<&str>::is_git_url("git@github.com:acme/template.git"));
    }

    #[test]
    fn local_paths_are_not_git_urls() {
        assert!(!GitLoader::<&str>::is_git_url("."));
        assert!(!GitLoader::<&str>::is_git_url("./templates/backend"));
        assert!(!GitLoader::<&str>::is_git_url("/abs/path/template"));
        assert!(!GitLoader::<&str>::is_git_url("user@localhost:template"));
    }

    #[test]
    fn extracts_repo_names() {
        assert_eq!(
            GitLoader::<&str>::extract_repo_name("https://github.com/acme/backend.git"),
            "backend"
        );
        assert_eq!(GitLoader::<&str>::extract_repo_name("git@github.com:acme/api"), "api");
        assert_eq!(
            GitLoader::<&str>::extract_repo_name("https://github.com/acme/backend/"),
            "backend"
        );
        assert_eq!(GitLoader::<&str>::extract_repo_name(""), "template");
    }
}
