//! Operation scripts: a line-oriented list of registry calls.
//!
//! ```text
//! # comment
//! create - Menu management      # top-level
//! create 10 Add menu            # child of 10
//! remove 10
//! ```
//!
//! The name of a `create` is the rest of the line, trimmed; it may contain spaces.
//! A `#` preceded by whitespace starts a trailing comment, so names can hold `#`
//! only when it is not preceded by a space (`Item#2`).

use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::IdManage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create { parent: Option<u64>, name: String },
    Remove { id: u64 },
}

/// An operation together with its 1-based line number in the script source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub operation: Operation,
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// New records appended to the store
    pub created: usize,
    /// `create` calls that hit an existing `(parent, name)` record
    pub reused: usize,
    pub removed: usize,
    /// `(line, id)` of `remove` calls naming an unknown id
    pub missing: Vec<(usize, u64)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<ScriptLine>,
}

struct ScriptParser {
    comment_regex: Regex,
    create_regex: Regex,
    remove_regex: Regex,
}

impl ScriptParser {
    fn new() -> Self {
        Self {
            comment_regex: Regex::new(r"\s+#.*$").expect("comment pattern"),
            create_regex: Regex::new(r"^create\s+(-|\S+)\s+(.+)$").expect("create pattern"),
            remove_regex: Regex::new(r"^remove\s+(\S+)$").expect("remove pattern"),
        }
    }

    /// Drops a trailing ` # ...` comment.
    fn strip_comment<'a>(&self, text: &'a str) -> &'a str {
        match self.comment_regex.find(text) {
            Some(m) => &text[..m.start()],
            None => text,
        }
    }

    fn parse_line(&self, line: usize, text: &str) -> ApplicationResult<Operation> {
        if let Some(caps) = self.create_regex.captures(text) {
            let parent = match &caps[1] {
                "-" => None,
                raw => Some(parse_id(line, raw)?),
            };
            return Ok(Operation::Create {
                parent,
                name: caps[2].trim().to_string(),
            });
        }
        if let Some(caps) = self.remove_regex.captures(text) {
            return Ok(Operation::Remove {
                id: parse_id(line, &caps[1])?,
            });
        }
        Err(ApplicationError::Parse {
            line,
            message: format!("unrecognized operation: {}", text),
        })
    }
}

fn parse_id(line: usize, raw: &str) -> ApplicationResult<u64> {
    raw.parse().map_err(|_| ApplicationError::Parse {
        line,
        message: format!("invalid menu id: {}", raw),
    })
}

impl Script {
    #[instrument(level = "debug", skip(content))]
    pub fn parse(content: &str) -> ApplicationResult<Self> {
        let parser = ScriptParser::new();
        let mut lines = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let operation = parser.parse_line(idx + 1, parser.strip_comment(text))?;
            lines.push(ScriptLine {
                line: idx + 1,
                operation,
            });
        }

        debug!(operations = lines.len(), "parsed script");
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Applies every operation in order, stopping at the first registry error.
    ///
    /// Operations before the failing line stay applied.
    #[instrument(level = "debug", skip(self, registry))]
    pub fn replay(&self, registry: &mut IdManage) -> ApplicationResult<ReplayReport> {
        let mut report = ReplayReport::default();

        for ScriptLine { line, operation } in &self.lines {
            match operation {
                Operation::Create { parent, name } => {
                    let before = registry.len();
                    registry
                        .create(*parent, name)
                        .map_err(|source| ApplicationError::Registry {
                            line: *line,
                            source,
                        })?;
                    if registry.len() > before {
                        report.created += 1;
                    } else {
                        report.reused += 1;
                    }
                }
                Operation::Remove { id } => {
                    if registry.remove(*id).is_some() {
                        report.removed += 1;
                    } else {
                        warn!(line, id, "remove of unknown menu id");
                        report.missing.push((*line, *id));
                    }
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_create_with_spaces_when_parsing_then_keeps_full_name() {
        let script = Script::parse("create -   Menu management  \n").unwrap();
        assert_eq!(
            script.lines()[0].operation,
            Operation::Create {
                parent: None,
                name: "Menu management".into()
            }
        );
    }

    #[test]
    fn given_bad_parent_when_parsing_then_reports_line() {
        let err = Script::parse("create - A\n\ncreate ten B\n").unwrap_err();
        match err {
            ApplicationError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("ten"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
