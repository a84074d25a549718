// src/search.rs

use log::debug;
use serde::Serialize;

use crate::models::document::Document;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::store::WorkspaceStore;

/// Results of a workspace-wide search, one list per entity kind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<'a> {
    pub projects: Vec<&'a Project>,
    pub documents: Vec<&'a Document>,
    pub tasks: Vec<&'a Task>,
    /// Sum of the three list lengths.
    pub total_results: usize,
}

fn field_matches(needle: &str, haystack: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn tag_matches(needle: &str, tags: &[String]) -> bool {
    tags.iter().any(|tag| field_matches(needle, tag))
}

impl WorkspaceStore {
    /// Case-insensitive substring search across project name/description,
    /// document title/content and task title/description, plus tags on all
    /// three. No ranking, tokenization or stemming; a record is listed once
    /// no matter how many fields match. A blank query matches nothing.
    pub fn search_workspace(&self, query: &str) -> SearchResults<'_> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults {
                projects: Vec::new(),
                documents: Vec::new(),
                tasks: Vec::new(),
                total_results: 0,
            };
        }

        let projects: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| {
                field_matches(&needle, &p.name)
                    || field_matches(&needle, &p.description)
                    || tag_matches(&needle, &p.tags)
            })
            .collect();
        let documents: Vec<&Document> = self
            .documents
            .iter()
            .filter(|d| {
                field_matches(&needle, &d.title)
                    || field_matches(&needle, &d.content)
                    || tag_matches(&needle, &d.tags)
            })
            .collect();
        let tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| {
                field_matches(&needle, &t.title)
                    || field_matches(&needle, &t.description)
                    || tag_matches(&needle, &t.tags)
            })
            .collect();

        let total_results = projects.len() + documents.len() + tasks.len();
        debug!("Search '{}': {} results", query, total_results);
        SearchResults {
            projects,
            documents,
            tasks,
            total_results,
        }
    }
}
