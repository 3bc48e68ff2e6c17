//! Image listing through a docker-compatible engine CLI.
//!
//! The engine is asked for every image id (`image ls --all --quiet --no-trunc`), then
//! the ids are inspected in batches. Inspect records carry the parent link and sizes the
//! list command omits.

use chrono::DateTime;
use log::{debug, trace};
use serde::Deserialize;
use std::collections::HashSet;
use std::process::Command;

use crate::error::{Error, Result};
use crate::image::{ImageNode, NONE_TAG};

/// Ids per `image inspect` invocation, keeping command lines short.
const INSPECT_BATCH: usize = 200;

#[derive(Debug, Deserialize)]
struct InspectRecord {
    #[serde(rename = "Id")]
    id: String,
    #[serde(default, rename = "Parent")]
    parent: Option<String>,
    #[serde(default, rename = "RepoTags")]
    repo_tags: Option<Vec<String>>,
    #[serde(default, rename = "Size")]
    size: u64,
    #[serde(default, rename = "VirtualSize")]
    virtual_size: Option<u64>,
    #[serde(default, rename = "Created")]
    created: Option<String>,
}

impl From<InspectRecord> for ImageNode {
    fn from(record: InspectRecord) -> Self {
        let repo_tags = match record.repo_tags {
            Some(tags) if !tags.is_empty() => tags,
            _ => vec![NONE_TAG.to_string()],
        };

        ImageNode {
            id: record.id,
            parent_id: record.parent.unwrap_or_default(),
            repo_tags,
            // newer engines dropped VirtualSize; Size is cumulative there
            virtual_size: record.virtual_size.unwrap_or(record.size),
            size: record.size,
            created: record.created.as_deref().map(parse_created).unwrap_or(0),
        }
    }
}

fn parse_created(created: &str) -> i64 {
    match DateTime::parse_from_rfc3339(created) {
        Ok(timestamp) => timestamp.timestamp(),
        Err(err) => {
            debug!("Unparseable creation time '{}': {}", created, err);
            0
        }
    }
}

/// Thin wrapper around one engine binary (`docker`, `nerdctl`).
pub struct EngineCli {
    program: &'static str,
}

impl EngineCli {
    pub fn new(program: &'static str) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &'static str {
        self.program
    }

    /// Fails with a connection error when the binary is missing or broken.
    pub fn probe(&self) -> Result<()> {
        self.run_command(&["--version"]).map(|_| ())
    }

    pub fn run_command(&self, args: &[&str]) -> Result<String> {
        trace!("Running {} {:?}", self.program, args);
        let output = Command::new(self.program).args(args).output().map_err(|err| {
            Error::Connection(format!(
                "Failed to execute {} command. Is {} installed? ({})",
                self.program, self.program, err
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.connection_error(stderr.trim()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    pub fn list_image_ids(&self) -> Result<Vec<String>> {
        let stdout = self.run_command(&["image", "ls", "--all", "--quiet", "--no-trunc"])?;
        Ok(unique_ids(&stdout))
    }

    pub fn inspect_images(&self, ids: &[String]) -> Result<Vec<ImageNode>> {
        let mut images = Vec::with_capacity(ids.len());
        for batch in ids.chunks(INSPECT_BATCH) {
            let mut args = vec!["image", "inspect"];
            args.extend(batch.iter().map(String::as_str));

            let stdout = self.run_command(&args)?;
            images.extend(parse_inspect_output(&stdout)?);
        }
        Ok(images)
    }

    fn connection_error(&self, detail: &str) -> Error {
        if std::env::var_os("IN_DOCKER").is_some_and(|value| !value.is_empty()) {
            Error::Connection(format!(
                "Unable to access {} socket, please run like this:\n  \
                 docker run --rm -v /var/run/docker.sock:/var/run/docker.sock imgviz <args>\n\
                 For more help, run 'imgviz --help'",
                self.program
            ))
        } else {
            Error::Connection(format!(
                "Unable to connect: {}\nFor help, run 'imgviz --help'",
                detail
            ))
        }
    }
}

/// Image ids from `image ls --quiet`, first occurrence kept.
fn unique_ids(stdout: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    stdout
        .lines()
        .map(str::trim)
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .map(str::to_string)
        .collect()
}

fn parse_inspect_output(stdout: &str) -> Result<Vec<ImageNode>> {
    let records: Vec<InspectRecord> = serde_json::from_str(stdout)
        .map_err(|err| Error::InputParse(format!("unexpected image inspect output: {}", err)))?;
    Ok(records.into_iter().map(ImageNode::from).collect())
}
