/*! Implements the truth-tree construction and its consistency check. */
use crate::trace;
use itertools::Itertools;
use sequitur_pl::syntax::Prop;
use std::collections::HashSet;
use tracing::debug;

/// Is one node of a truth tree: the formulae accumulated at this node and
/// either no children (a leaf) or exactly two children representing a case
/// split. A node exclusively owns its children; the tree is acyclic.
///
/// Invariant: `props` is the result of exhaustively applying the
/// non-branching trunk rules to the node's input formulae, before any
/// branching rule is considered.
pub struct TruthTree {
    props: Vec<Prop>,
    children: Option<Box<(TruthTree, TruthTree)>>,
}

impl TruthTree {
    /// Builds the decomposition tree rooted at `props`.
    pub fn new(props: Vec<Prop>) -> Self {
        let props = expand_trunk(props);
        debug!(event = trace::EXPAND, props = %render(&props));
        let children = split(&props).map(|(left, right)| {
            debug!(event = trace::SPLIT, props = %render(&props));
            Box::new((TruthTree::new(left), TruthTree::new(right)))
        });
        Self { props, children }
    }

    /// Returns the formulae accumulated at this node. Children hold only
    /// their own new formulae; ancestors are accumulated along the path by
    /// the consistency check.
    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    /// Returns the two children of a case split, or `None` at a leaf.
    pub fn children(&self) -> Option<(&TruthTree, &TruthTree)> {
        self.children.as_ref().map(|pair| (&pair.0, &pair.1))
    }

    /// Returns true if at least one root-to-leaf branch of the receiver is
    /// free of contradictions. The formula set the tree was built from is
    /// satisfiable exactly when this holds.
    pub fn is_consistent(&self) -> bool {
        self.walk(&HashSet::new())
    }

    fn walk(&self, ancestors: &HashSet<Prop>) -> bool {
        let mut path = ancestors.clone();
        path.extend(self.props.iter().cloned());
        match &self.children {
            Some(pair) => pair.0.walk(&path) || pair.1.walk(&path),
            None => {
                let open = is_open(&path);
                if open {
                    debug!(event = trace::OPEN, props = %render_path(&path));
                } else {
                    debug!(event = trace::CLOSE, props = %render_path(&path));
                }
                open
            }
        }
    }
}

/// Returns true if the given formula set is satisfiable.
pub fn is_satisfiable<I>(props: I) -> bool
where
    I: IntoIterator<Item = Prop>,
{
    TruthTree::new(props.into_iter().collect()).is_consistent()
}

// Negations are taken with the flattening constructor throughout, so a
// doubly negated formula cancels before any contradiction check.
fn is_open(path: &HashSet<Prop>) -> bool {
    path.iter().all(|prop| !path.contains(&Prop::not(prop.clone())))
}

/// Non-branching expansion: the formulae a trunk rule derives from `prop`,
/// all of which must hold together with it.
fn trunk_rule(prop: &Prop) -> Vec<Prop> {
    match prop {
        Prop::And { left, right } => vec![(**left).clone(), (**right).clone()],
        Prop::Not { formula } => match &**formula {
            Prop::Implies {
                premise,
                consequence,
            } => vec![(**premise).clone(), Prop::not((**consequence).clone())],
            Prop::Or { left, right } => vec![
                Prop::not((**left).clone()),
                Prop::not((**right).clone()),
            ],
            Prop::Not { formula } => vec![(**formula).clone()],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Branching expansion: the two alternative formula sets `prop` splits into,
/// at least one of which must hold.
fn branch_rule(prop: &Prop) -> Option<(Vec<Prop>, Vec<Prop>)> {
    match prop {
        Prop::Implies {
            premise,
            consequence,
        } => Some((
            vec![Prop::not((**premise).clone())],
            vec![(**consequence).clone()],
        )),
        Prop::Or { left, right } => Some((vec![(**left).clone()], vec![(**right).clone()])),
        Prop::Iff { left, right } => {
            let (left, right) = ((**left).clone(), (**right).clone());
            Some((
                vec![left.clone(), right.clone()],
                vec![Prop::not(left), Prop::not(right)],
            ))
        }
        Prop::Not { formula } => match &**formula {
            Prop::And { left, right } => Some((
                vec![Prop::not((**left).clone())],
                vec![Prop::not((**right).clone())],
            )),
            Prop::Iff { left, right } => {
                let (left, right) = ((**left).clone(), (**right).clone());
                Some((
                    vec![Prop::not(left.clone()), right.clone()],
                    vec![left, Prop::not(right)],
                ))
            }
            _ => None,
        },
        _ => None,
    }
}

/// Applies the trunk rules to a fixed point, accumulating every derived
/// formula after the formulae it was derived from. Expansion only adds;
/// nothing is discarded.
fn expand_trunk(props: Vec<Prop>) -> Vec<Prop> {
    let mut expanded = Vec::new();
    let mut frontier = props;
    while !frontier.is_empty() {
        let derived = frontier.iter().flat_map(trunk_rule).collect();
        expanded.extend(frontier);
        frontier = derived;
    }
    expanded
}

/// Collects the branch rules of all formulae in `props` into the formula
/// sets of exactly two children: each branchable formula contributes its
/// first alternative to the left child and its second to the right child.
/// Combinations beyond this single split are explored by recursive
/// re-expansion of the children, not enumerated here.
fn split(props: &[Prop]) -> Option<(Vec<Prop>, Vec<Prop>)> {
    let cases: Vec<_> = props.iter().filter_map(branch_rule).collect();
    if cases.is_empty() {
        return None;
    }
    Some(cases.into_iter().fold(
        (Vec::new(), Vec::new()),
        |(mut left, mut right), (first, second)| {
            left.extend(first);
            right.extend(second);
            (left, right)
        },
    ))
}

fn render(props: &[Prop]) -> String {
    props.iter().map(|prop| prop.to_string()).join(", ")
}

fn render_path(path: &HashSet<Prop>) -> String {
    path.iter().map(|prop| prop.to_string()).join(", ")
}
