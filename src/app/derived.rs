//! Derived listing view models.
//!
//! Pure functions recomputed on demand from the fetched lists and the current
//! query; nothing here is cached on the state.

use crate::domain::{Job, Lookup};
use crate::routing::{FilterKey, QueryParams};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Jobs belonging to one department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobGroup {
    pub department: Lookup,
    pub jobs: Vec<Job>,
}

/// One chip in the applied-filter summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFilter {
    pub key: FilterKey,
    pub value: String,
    pub label: String,
}

/// The three lookup lists backing the dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookups {
    pub departments: Vec<Lookup>,
    pub locations: Vec<Lookup>,
    pub functions: Vec<Lookup>,
}

impl Lookups {
    /// The list a dropdown key draws from. Search has none.
    #[must_use]
    pub fn for_key(&self, key: FilterKey) -> &[Lookup] {
        match key {
            FilterKey::Department => &self.departments,
            FilterKey::Location => &self.locations,
            FilterKey::Function => &self.functions,
            FilterKey::Search => &[],
        }
    }

    /// Title of the lookup with `id` under `key`.
    #[must_use]
    pub fn title(&self, key: FilterKey, id: &str) -> Option<&str> {
        self.for_key(key)
            .iter()
            .find(|lookup| lookup.id == id)
            .map(|lookup| lookup.title.as_str())
    }
}

/// Groups `jobs` under the departments they reference.
///
/// Only departments with at least one job appear, ordered by title
/// (case-insensitive, ties broken by the raw title). Jobs without a
/// department, or whose department is not in `departments`, are left out.
/// Job order inside a group follows the input order.
///
/// # Examples
///
/// ```
/// use zjobs::app::derived::group_by_department;
/// use zjobs::domain::{Job, Lookup};
///
/// let mut job = Job::new("1", "Engineer");
/// job.department = Some(Lookup::new("d1", "Engineering"));
/// let departments = [Lookup::new("d1", "Engineering"), Lookup::new("d2", "Sales")];
///
/// let groups = group_by_department(&[job], &departments);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].department.title, "Engineering");
/// ```
#[must_use]
pub fn group_by_department(jobs: &[Job], departments: &[Lookup]) -> Vec<JobGroup> {
    let mut groups: Vec<JobGroup> = Vec::with_capacity(departments.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(departments.len());

    for department in departments {
        index.entry(department.id.as_str()).or_insert_with(|| {
            groups.push(JobGroup {
                department: department.clone(),
                jobs: Vec::new(),
            });
            groups.len() - 1
        });
    }

    for job in jobs {
        if let Some(&slot) = job.department_id().and_then(|id| index.get(id)) {
            groups[slot].jobs.push(job.clone());
        }
    }

    groups.retain(|group| !group.jobs.is_empty());
    groups.sort_by(|a, b| compare_titles(&a.department.title, &b.department.title));
    groups
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Builds the applied-filter summary from the committed query.
///
/// Entries come in key order: search, department, location, function. A
/// lookup id that is not (yet) known is labelled with the raw id.
#[must_use]
pub fn applied_filters(query: &QueryParams, lookups: &Lookups) -> Vec<AppliedFilter> {
    FilterKey::ALL
        .into_iter()
        .filter_map(|key| {
            let value = query.filter(key);
            if value.is_empty() {
                return None;
            }
            let label = match key {
                FilterKey::Search => format!("{}: \"{value}\"", key.label()),
                _ => format!("{}: {}", key.label(), lookups.title(key, value).unwrap_or(value)),
            };
            Some(AppliedFilter {
                key,
                value: value.to_string(),
                label,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, department: Option<(&str, &str)>) -> Job {
        let mut job = Job::new(id, format!("Job {id}"));
        job.department = department.map(|(id, title)| Lookup::new(id, title));
        job
    }

    #[test]
    fn groups_only_non_empty_known_departments() {
        let jobs = [job("1", Some(("d1", "Engineering")))];
        let departments = [Lookup::new("d1", "Engineering"), Lookup::new("d2", "Sales")];

        let groups = group_by_department(&jobs, &departments);

        assert_eq!(
            groups,
            vec![JobGroup {
                department: Lookup::new("d1", "Engineering"),
                jobs: vec![jobs[0].clone()],
            }]
        );
    }

    #[test]
    fn groups_are_ordered_by_title_case_insensitively() {
        let departments = [
            Lookup::new("s", "sales"),
            Lookup::new("e", "Engineering"),
            Lookup::new("a", "Admin"),
        ];
        let jobs = [
            job("1", Some(("s", "sales"))),
            job("2", Some(("e", "Engineering"))),
            job("3", Some(("a", "Admin"))),
            job("4", Some(("e", "Engineering"))),
        ];

        let groups = group_by_department(&jobs, &departments);
        let titles: Vec<_> = groups.iter().map(|g| g.department.title.as_str()).collect();

        assert_eq!(titles, ["Admin", "Engineering", "sales"]);
        assert_eq!(groups[1].jobs.iter().map(|j| j.id.as_str()).collect::<Vec<_>>(), ["2", "4"]);
    }

    #[test]
    fn union_of_groups_is_jobs_with_known_department() {
        let departments = [Lookup::new("d1", "Engineering"), Lookup::new("d2", "Sales")];
        let jobs = [
            job("1", Some(("d1", "Engineering"))),
            job("2", None),
            job("3", Some(("d9", "Ghost"))),
            job("4", Some(("d2", "Sales"))),
        ];

        let groups = group_by_department(&jobs, &departments);
        let mut ids: Vec<_> = groups.iter().flat_map(|g| g.jobs.iter().map(|j| j.id.clone())).collect();
        ids.sort();

        assert_eq!(ids, ["1", "4"]);
        assert!(groups.iter().all(|g| !g.jobs.is_empty()));
    }

    #[test]
    fn no_departments_means_no_groups() {
        assert!(group_by_department(&[job("1", Some(("d1", "E")))], &[]).is_empty());
    }

    #[test]
    fn department_filter_is_labelled_with_its_title() {
        let query = QueryParams::parse("departmentId=d1");
        let lookups = Lookups {
            departments: vec![Lookup::new("d1", "Engineering")],
            ..Lookups::default()
        };

        let summary: Vec<_> = applied_filters(&query, &lookups)
            .into_iter()
            .map(|f| (f.key.param(), f.label))
            .collect();

        assert_eq!(summary, vec![("departmentId", "Department: Engineering".to_string())]);
    }

    #[test]
    fn summary_covers_all_keys_in_order() {
        let query = QueryParams::parse("functionId=f1&q=rust&locationId=l9");
        let lookups = Lookups {
            functions: vec![Lookup::new("f1", "Development")],
            ..Lookups::default()
        };

        let labels: Vec<_> = applied_filters(&query, &lookups).into_iter().map(|f| f.label).collect();

        assert_eq!(labels, ["Search: \"rust\"", "Location: l9", "Function: Development"]);
    }

    #[test]
    fn empty_query_has_no_summary() {
        assert!(applied_filters(&QueryParams::new(), &Lookups::default()).is_empty());
    }
}
