//! Social share link generation for job postings.
//!
//! Each target is a fixed URL template parameterized by the page address and a
//! generated share title. Parameters are encoded with the same reserved set as
//! ECMAScript `encodeURIComponent`, so links match what a browser would build.

use crate::domain::Job;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped by `encodeURIComponent`: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Maximum number of description characters carried in a share summary.
const SUMMARY_CHARS: usize = 200;

/// Supported share destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    LinkedIn,
    Twitter,
}

impl ShareTarget {
    /// All targets in display order.
    pub const ALL: [Self; 3] = [Self::Facebook, Self::LinkedIn, Self::Twitter];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }
}

/// A generated share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub target: ShareTarget,
    pub url: String,
}

/// Percent-encodes `input` like `encodeURIComponent`.
///
/// # Examples
///
/// ```
/// use zjobs::domain::share::encode_component;
///
/// assert_eq!(encode_component("a b&c"), "a%20b%26c");
/// assert_eq!(encode_component("it's (fine)!"), "it's%20(fine)!");
/// ```
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds the share title text (unencoded).
#[must_use]
pub fn share_title(job: &Job, default_company: &str) -> String {
    let company = job
        .company
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(default_company);
    format!("Check out this job opening: {} at {company}", job.title)
}

/// Builds the share summary: the first 200 characters of the description
/// followed by an ellipsis.
#[must_use]
pub fn share_summary(job: &Job) -> String {
    let head: String = job.description().chars().take(SUMMARY_CHARS).collect();
    format!("{head}...")
}

/// Builds the share link for one target.
#[must_use]
pub fn share_link(target: ShareTarget, job: &Job, page_url: &str, default_company: &str) -> ShareLink {
    let url = encode_component(page_url);
    let title = encode_component(&share_title(job, default_company));

    let url = match target {
        ShareTarget::Facebook => {
            format!("https://www.facebook.com/sharer/sharer.php?u={url}&quote={title}")
        }
        ShareTarget::LinkedIn => {
            let summary = encode_component(&share_summary(job));
            format!(
                "https://www.linkedin.com/shareArticle?mini=true&url={url}&title={title}&summary={summary}"
            )
        }
        ShareTarget::Twitter => {
            format!("https://twitter.com/intent/tweet?url={url}&text={title}")
        }
    };

    ShareLink { target, url }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> Job {
        let mut job = Job::new("42", "Rust Engineer");
        job.description = Some("<p>Build things</p>".to_string());
        job
    }

    #[test]
    fn facebook_link_encodes_url_and_title() {
        let link = share_link(ShareTarget::Facebook, &job(), "http://localhost:3000/jobs/42", "Teknorix");

        assert_eq!(
            link.url,
            "https://www.facebook.com/sharer/sharer.php?u=http%3A%2F%2Flocalhost%3A3000%2Fjobs%2F42\
             &quote=Check%20out%20this%20job%20opening%3A%20Rust%20Engineer%20at%20Teknorix"
        );
    }

    #[test]
    fn linkedin_summary_is_truncated_to_200_chars() {
        let mut job = job();
        job.description = Some("x".repeat(500));

        assert_eq!(share_summary(&job), format!("{}...", "x".repeat(200)));

        let link = share_link(ShareTarget::LinkedIn, &job, "http://h/jobs/42", "Teknorix");
        assert!(link.url.ends_with(&format!("&summary={}...", "x".repeat(200))));
        assert!(link.url.starts_with("https://www.linkedin.com/shareArticle?mini=true&url=http%3A%2F%2Fh%2Fjobs%2F42&title="));
    }

    #[test]
    fn job_company_overrides_default() {
        let mut job = job();
        job.company = Some("Acme".to_string());

        assert_eq!(share_title(&job, "Teknorix"), "Check out this job opening: Rust Engineer at Acme");
    }

    #[test]
    fn twitter_link_carries_url_and_text() {
        let link = share_link(ShareTarget::Twitter, &job(), "http://h/", "Teknorix");

        assert_eq!(link.target, ShareTarget::Twitter);
        assert!(link.url.starts_with("https://twitter.com/intent/tweet?url=http%3A%2F%2Fh%2F&text="));
    }
}
