//! One-shot fetch of the user directory.
//!
//! An unavailable directory degrades to an empty payload: public chat keeps
//! working, private sends fail resolution until the next run.

use anyhow::Result;

use crate::domain::user::User;

pub async fn fetch_users(base_url: &str) -> Vec<User> {
    match try_fetch(base_url).await {
        Ok(users) => {
            tracing::info!(count = users.len(), "user directory loaded");
            users
        }
        Err(error) => {
            tracing::warn!(
                error = %error,
                "user directory unavailable, private sends will fail resolution"
            );
            Vec::new()
        }
    }
}

async fn try_fetch(base_url: &str) -> Result<Vec<User>> {
    let users = reqwest::get(directory_url(base_url))
        .await?
        .error_for_status()?
        .json::<Vec<User>>()
        .await?;
    Ok(users)
}

fn directory_url(base_url: &str) -> String {
    format!("{}/api/users", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_url_joins_the_api_path() {
        assert_eq!(
            directory_url("http://127.0.0.1:5000"),
            "http://127.0.0.1:5000/api/users"
        );
    }

    #[test]
    fn directory_url_tolerates_trailing_slash() {
        assert_eq!(
            directory_url("http://127.0.0.1:5000/"),
            "http://127.0.0.1:5000/api/users"
        );
    }
}
