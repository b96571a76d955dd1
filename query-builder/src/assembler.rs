use crate::prelude::*;

/// What the last mutation of a [`QueryAssembler`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    FragmentAdded(FragmentId),
    FragmentRemoved(FragmentId),
    /// The query string was replaced by hand. Fragments are unchanged.
    QueryEdited,
    /// Fragments were cleared and the query replaced by a template.
    TemplateApplied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&Change)>;

/// Holds the fragments and the displayed query string.
///
/// The query is recomputed synchronously at the end of every fragment mutation and
/// always overwrites whatever was displayed before, including manual edits.
/// Observers are called after each change, in subscription order.
pub struct QueryAssembler {
    config: BuilderConfig,
    fragments: Vec<Fragment>,
    query: String,
    next_fragment_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription_id: u64,
}

impl std::fmt::Debug for QueryAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryAssembler")
            .field("config", &self.config)
            .field("fragments", &self.fragments)
            .field("query", &self.query)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for QueryAssembler {
    fn default() -> Self {
        QueryAssembler::new(BuilderConfig::default())
    }
}

impl QueryAssembler {
    pub fn new(config: BuilderConfig) -> QueryAssembler {
        QueryAssembler {
            config,
            fragments: Vec::new(),
            query: String::new(),
            next_fragment_id: 0,
            observers: Vec::new(),
            next_subscription_id: 0,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The displayed query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Appends a fragment. Whitespace-only values are ignored and `None` is returned.
    pub fn add_fragment(&mut self, kind: FragmentKind, raw_value: &str) -> Option<FragmentId> {
        let id = FragmentId(self.next_fragment_id);
        let fragment = Fragment::new(id, kind, raw_value)?;
        self.next_fragment_id += 1;
        debug!("Adding {kind} fragment {id}: {}", fragment.value());
        self.fragments.push(fragment);
        self.recompute_query();
        self.notify(Change::FragmentAdded(id));
        Some(id)
    }

    /// Removes the fragment with this id. Returns `false` and changes nothing if there is none.
    pub fn remove_fragment(&mut self, id: FragmentId) -> bool {
        let Some(position) = self.fragments.iter().position(|f| f.id() == id) else {
            trace!("No fragment {id} to remove");
            return false;
        };
        let fragment = self.fragments.remove(position);
        debug!("Removed {} fragment {id}: {}", fragment.kind(), fragment.value());
        self.recompute_query();
        self.notify(Change::FragmentRemoved(id));
        true
    }

    /// Rebuilds the query from the fragments, in order, separated by single spaces.
    pub fn recompute_query(&mut self) -> &str {
        self.query = self.fragments.iter().map(Fragment::render).collect::<Vec<_>>().join(" ");
        trace!("Recomputed query: {}", self.query);
        &self.query
    }

    pub fn set_query_directly(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.notify(Change::QueryEdited);
    }

    /// Clears the fragments and displays `text`.
    ///
    /// No recompute happens here: the template stays displayed until the next fragment mutation.
    pub fn apply_template(&mut self, text: impl Into<String>) {
        self.fragments.clear();
        self.query = text.into();
        info!("Applied template: {}", self.query);
        self.notify(Change::TemplateApplied);
    }

    pub fn subscribe(&mut self, observer: impl Fn(&Change) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(sub_id, _)| *sub_id != id);
        self.observers.len() != len
    }

    fn notify(&self, change: Change) {
        for (_, observer) in &self.observers {
            observer(&change);
        }
    }
}
