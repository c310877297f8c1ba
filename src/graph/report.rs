//! Dataset integrity and frequency summaries.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::Concept;
use crate::ontology::{category_of, entry_of, Category};

/// What a loaded dataset contains and what the engine will silently skip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetReport {
    pub concepts: usize,
    pub relationships: usize,
    /// (source, target) pairs whose target concept does not exist.
    pub dangling: Vec<(String, String)>,
    /// Labels outside the ontology table, with occurrence counts.
    pub unclassified_labels: BTreeMap<String, usize>,
    pub missing_era: Vec<String>,
    pub duplicate_ids: Vec<String>,
    /// Occurrences of every relation label.
    pub relation_counts: BTreeMap<String, usize>,
    pub category_counts: HashMap<Category, usize>,
}

impl DatasetReport {
    pub fn from_concepts(concepts: &[Concept]) -> Self {
        let mut report = DatasetReport {
            concepts: concepts.len(),
            ..Default::default()
        };

        let mut seen = HashSet::new();
        for concept in concepts {
            if !seen.insert(concept.id.as_str()) {
                report.duplicate_ids.push(concept.id.clone());
            }
            if concept.era.is_none() {
                report.missing_era.push(concept.id.clone());
            }
        }

        for concept in concepts {
            for rel in &concept.relationships {
                report.relationships += 1;

                if !seen.contains(rel.target.as_str()) {
                    report.dangling.push((concept.id.clone(), rel.target.clone()));
                }

                let label = rel.relation_type.as_str().to_string();
                if entry_of(&rel.relation_type).is_none() {
                    *report.unclassified_labels.entry(label.clone()).or_insert(0) += 1;
                }
                *report.relation_counts.entry(label).or_insert(0) += 1;
                *report.category_counts.entry(category_of(&rel.relation_type)).or_insert(0) += 1;
            }
        }

        report
    }

    /// No dangling targets and no duplicate ids.
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.duplicate_ids.is_empty()
    }

    /// Relation labels by descending frequency, then label.
    pub fn top_relations(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .relation_counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        rows
    }
}
