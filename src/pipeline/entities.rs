//! Pulls job identifiers out of the interpreter's text.

use std::sync::LazyLock;

use regex::Regex;

/// `job_id` followed by digits.
static JOB_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)job_id\s*([0-9]+)").expect("job_id regex"));

/// `job name` followed by a run of word characters and spaces.
static JOB_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)job\s+name\s*([0-9A-Za-z_\s]+)").expect("job name regex")
});

/// `column` followed by a run of word characters and spaces.
static COLUMN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)column\s*([0-9A-Za-z_\s]+)").expect("column regex"));

/// Fields recognised in one message. Built fresh per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedEntities {
    pub job_id: Option<String>,
    pub job_name: Option<String>,
    pub column: Option<String>,
}

impl ExtractedEntities {
    pub fn is_empty(&self) -> bool {
        self.job_id.is_none() && self.job_name.is_none() && self.column.is_none()
    }
}

/// Runs the three patterns independently; the first match of each wins.
///
/// Values are trimmed but otherwise unchecked. A capture that trims to
/// nothing leaves its field unset.
pub fn extract_entities(text: &str) -> ExtractedEntities {
    ExtractedEntities {
        job_id: first_capture(&JOB_ID_RE, text),
        job_name: first_capture(&JOB_NAME_RE, text),
        column: first_capture(&COLUMN_RE, text),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
