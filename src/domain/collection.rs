//! Ordered in-memory record collections backing the list pages.

use super::models::{Record, RecordId};
use super::notifications::Notifier;

/// An ordered set of records, unique by id, in insertion order.
///
/// Each page builds its own collection from a seed list; nothing is shared
/// between pages and nothing outlives the page state.
///
/// # Examples
///
/// ```
/// use streamly_admin::domain::{seed, Collection, NewUser, Role, RecordId};
///
/// let mut users = Collection::new(seed::users());
/// let mut sink = Vec::new();
/// let added = users.add(
///     NewUser { name: "Test".into(), email: "t@x.com".into(), role: Role::User },
///     &mut sink,
/// );
/// assert_eq!(added.id, RecordId(6));
/// ```
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    /// Builds a collection from seed records. Duplicate ids after the first
    /// occurrence are dropped.
    pub fn new(seed: Vec<R>) -> Self {
        let mut records: Vec<R> = Vec::with_capacity(seed.len());
        for record in seed {
            if records.iter().any(|existing| existing.id() == record.id()) {
                tracing::debug!(id = %record.id(), "dropping duplicate seed record");
                continue;
            }
            records.push(record);
        }
        Self { records }
    }

    /// Id the next added record will get: one past the largest id, or 1.
    pub fn next_id(&self) -> RecordId {
        let max = self.records.iter().map(|r| r.id().0).max().unwrap_or(0);
        RecordId(max + 1)
    }

    /// Appends a record built from `fields` under a fresh id.
    pub fn add(&mut self, fields: R::Fields, notifier: &mut dyn Notifier) -> &R {
        let id = self.next_id();
        let record = R::from_fields(id, fields);
        notifier.notify(record.added_notice());
        tracing::debug!(%id, name = record.name(), "record added");

        self.records.push(record);
        let last = self.records.len() - 1;
        &self.records[last]
    }

    /// Removes the record with `id`. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: RecordId, notifier: &mut dyn Notifier) -> Option<R> {
        let Some(position) = self.records.iter().position(|r| r.id() == id) else {
            tracing::debug!(%id, "remove ignored, record not found");
            return None;
        };

        let record = self.records.remove(position);
        notifier.notify(record.removed_notice());
        Some(record)
    }

    /// Records whose searchable text contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Filtered<'_, R> {
        Filtered {
            records: &self.records,
            query: query.to_lowercase(),
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A read-only, restartable view over the records matching a query.
///
/// Each call to [`Filtered::iter`] starts from the beginning of the
/// collection again.
#[derive(Debug, Clone)]
pub struct Filtered<'a, R> {
    records: &'a [R],
    query: String,
}

impl<'a, R: Record> Filtered<'a, R> {
    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.records
            .iter()
            .filter(move |record| self.query.is_empty() || record.matches(&self.query))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// The `index`-th matching record.
    pub fn nth(&self, index: usize) -> Option<&'a R> {
        self.iter().nth(index)
    }

    pub fn to_vec(&self) -> Vec<&'a R> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{NewUser, Role, User};
    use crate::domain::notifications::Notification;
    use crate::domain::seed;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
        }
    }

    fn ids(users: &Collection<User>) -> Vec<u32> {
        users.records().iter().map(|u| u.id.0).collect()
    }

    #[test]
    fn test_seed_user_scenario() {
        let mut users = Collection::new(seed::users());
        let mut sink: Vec<Notification> = Vec::new();
        assert_eq!(users.len(), 5);

        let found = users.filter("carlos").to_vec();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Carlos Rodriguez");

        let removed = users.remove(RecordId(4), &mut sink);
        assert_eq!(removed.map(|u| u.name), Some("Sara Johnson".to_string()));
        assert_eq!(users.len(), 4);
        assert!(users.get(RecordId(4)).is_none());

        let added = users.add(new_user("Test", "t@x.com"), &mut sink).clone();
        assert_eq!(added.id, RecordId(6));
        assert_eq!(added.name, "Test");
        assert_eq!(added.email, "t@x.com");
        assert_eq!(added.role, Role::User);
        assert_eq!(ids(&users), vec![1, 2, 3, 5, 6]);

        assert_eq!(sink.len(), 2);
        assert!(sink[0].is_error());
        assert_eq!(sink[1].title, "User created");
    }

    #[test]
    fn test_add_to_empty_collection_starts_at_one() {
        let mut users: Collection<User> = Collection::default();
        let mut sink = Vec::new();
        assert_eq!(users.add(new_user("A", "a@x.com"), &mut sink).id, RecordId(1));
        assert_eq!(users.add(new_user("B", "b@x.com"), &mut sink).id, RecordId(2));
    }

    #[test]
    fn test_ids_follow_max_not_length() {
        let mut users = Collection::new(seed::users());
        let mut sink = Vec::new();
        users.remove(RecordId(2), &mut sink);
        users.remove(RecordId(3), &mut sink);

        // Three records left, but the next id must clear the highest one.
        assert_eq!(users.add(new_user("N", "n@x.com"), &mut sink).id, RecordId(6));
    }

    #[test]
    fn test_removing_last_record_allows_id_reuse_only_above_remaining_max() {
        let mut users = Collection::new(seed::users());
        let mut sink = Vec::new();
        users.remove(RecordId(5), &mut sink);
        assert_eq!(users.next_id(), RecordId(5));
    }

    #[test]
    fn test_remove_unknown_id_is_silent_noop() {
        let mut users = Collection::new(seed::users());
        let mut sink: Vec<Notification> = Vec::new();
        let before = ids(&users);

        assert!(users.remove(RecordId(42), &mut sink).is_none());
        assert_eq!(ids(&users), before);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_removed_record_never_reappears_in_filter() {
        let mut users = Collection::new(seed::users());
        let mut sink = Vec::new();
        users.remove(RecordId(3), &mut sink);

        assert!(users.filter("").iter().all(|u| u.id != RecordId(3)));
        assert!(users.filter("john").iter().all(|u| u.id != RecordId(3)));
    }

    #[test]
    fn test_filter_is_case_insensitive_and_matches_email() {
        let users = Collection::new(seed::users());

        let by_name: Vec<_> = users.filter("MARIA").iter().map(|u| u.id.0).collect();
        assert_eq!(by_name, vec![2]);

        let by_email: Vec<_> = users.filter("michael@").iter().map(|u| u.id.0).collect();
        assert_eq!(by_email, vec![5]);

        assert_eq!(users.filter("example.com").count(), 5);
        assert_eq!(users.filter("nobody").count(), 0);
    }

    #[test]
    fn test_filter_keeps_whitespace_in_query() {
        let users = Collection::new(seed::users());

        assert_eq!(users.filter("smith ").count(), 0);
        let names: Vec<_> = users.filter(" smith").iter().map(|u| u.name.clone()).collect();
        assert_eq!(names, vec!["John Smith"]);

        assert_eq!(users.filter("  ").count(), 0);
        assert_eq!(users.filter(" ").count(), 5);
    }

    #[test]
    fn test_filter_is_idempotent_and_restartable() {
        let users = Collection::new(seed::users());
        let view = users.filter("o");

        let first: Vec<_> = view.iter().map(|u| u.id).collect();
        let second: Vec<_> = view.iter().map(|u| u.id).collect();
        assert_eq!(first, second);

        let again: Vec<_> = users.filter("o").iter().map(|u| u.id).collect();
        assert_eq!(first, again);
        assert_eq!(users.len(), 5);
    }

    #[test]
    fn test_filter_preserves_insertion_order() {
        let mut users = Collection::new(seed::users());
        let mut sink = Vec::new();
        users.add(new_user("Carla Diaz", "carla@example.com"), &mut sink);

        let names: Vec<_> = users.filter("car").iter().map(|u| u.name.clone()).collect();
        assert_eq!(names, vec!["Carlos Rodriguez", "Carla Diaz"]);
    }

    #[test]
    fn test_duplicate_seed_ids_are_dropped() {
        let mut seed = seed::users();
        seed.push(seed[0].clone());
        let users = Collection::new(seed);
        assert_eq!(users.len(), 5);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut users = Collection::new(seed::users());
        if let Some(user) = users.get_mut(RecordId(1)) {
            user.streams = 9;
        }
        assert_eq!(users.get(RecordId(1)).map(|u| u.streams), Some(9));
    }
}
