use std::collections::{HashMap, HashSet};

use log::warn;

use crate::model::{Id, MemberRecord};

/// A member with its resolved reports, owned by the builder's output.
/// `depth` is 0 for roots and parent depth + 1 below.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberNode {
    pub record: MemberRecord,
    pub children: Vec<MemberNode>,
    pub depth: u32,
}

/// A parent reference the data should not contain. Anomalies are absorbed
/// by promoting the affected member to a root; they never fail the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// `parent` does not exist among the active records.
    DanglingParent {
        member: Id<MemberRecord>,
        parent: Id<MemberRecord>,
    },
    /// `parent` exists but belongs to a different category.
    CrossCategoryParent {
        member: Id<MemberRecord>,
        parent: Id<MemberRecord>,
    },
    /// `member` sat on a parent cycle and had its parent edge cut.
    CycleCut { member: Id<MemberRecord> },
}

/// Output of [`build_hierarchy`]: the forest plus the anomalies absorbed
/// while resolving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
    pub roots: Vec<MemberNode>,
    pub anomalies: Vec<Anomaly>,
}

impl Hierarchy {
    /// Total number of members in the forest.
    pub fn member_count(&self) -> usize {
        fn count(node: &MemberNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }

    /// Nodes grouped by depth, shallowest first. This is the shape the
    /// org-chart renderer consumes: one row per generation, members within
    /// a row in forest iteration order.
    pub fn levels(&self) -> Vec<Vec<&MemberNode>> {
        let mut levels: Vec<Vec<&MemberNode>> = Vec::new();
        fn visit<'a>(node: &'a MemberNode, levels: &mut Vec<Vec<&'a MemberNode>>) {
            let depth = node.depth as usize;
            if levels.len() <= depth {
                levels.resize_with(depth + 1, Vec::new);
            }
            levels[depth].push(node);
            for child in &node.children {
                visit(child, levels);
            }
        }
        for root in &self.roots {
            visit(root, &mut levels);
        }
        levels
    }
}

/// Resolves a flat member list into an org-chart forest.
///
/// Inactive records are dropped. A dangling or cross-category parent
/// reference makes the member a root and is reported as an [`Anomaly`].
/// Parent cycles are cut at the cycle's lowest-id member, so every active
/// record lands in the forest exactly once. Pure and deterministic: the
/// same records always produce the same forest, siblings and roots ordered
/// by `(order, id)`.
pub fn build_hierarchy(records: &[MemberRecord]) -> Hierarchy {
    let mut active: Vec<&MemberRecord> = records.iter().filter(|r| r.active).collect();
    active.sort_by(|a, b| a.order.cmp(&b.order).then(a.id.cmp(&b.id)));

    let by_id: HashMap<Id<MemberRecord>, &MemberRecord> =
        active.iter().map(|r| (r.id, *r)).collect();

    let mut anomalies = Vec::new();
    let mut parent_of: HashMap<Id<MemberRecord>, Option<Id<MemberRecord>>> =
        HashMap::with_capacity(active.len());

    for record in &active {
        let parent = match record.parent_id {
            None => None,
            Some(parent_id) => match by_id.get(&parent_id) {
                None => {
                    warn!(
                        "member {} points at missing parent {}, promoting to root",
                        record.id, parent_id
                    );
                    anomalies.push(Anomaly::DanglingParent {
                        member: record.id,
                        parent: parent_id,
                    });
                    None
                }
                Some(parent) if parent.category != record.category => {
                    warn!(
                        "member {} points at parent {} of another category, promoting to root",
                        record.id, parent_id
                    );
                    anomalies.push(Anomaly::CrossCategoryParent {
                        member: record.id,
                        parent: parent_id,
                    });
                    None
                }
                Some(_) => Some(parent_id),
            },
        };
        parent_of.insert(record.id, parent);
    }

    cut_cycles(&active, &mut parent_of, &mut anomalies);

    // `active` is already (order, id)-sorted, so sibling lists and the
    // root list inherit that order from a single grouping pass.
    let mut roots: Vec<Id<MemberRecord>> = Vec::new();
    let mut children_of: HashMap<Id<MemberRecord>, Vec<Id<MemberRecord>>> = HashMap::new();
    for record in &active {
        match parent_of[&record.id] {
            None => roots.push(record.id),
            Some(parent_id) => children_of.entry(parent_id).or_default().push(record.id),
        }
    }

    let roots = roots
        .into_iter()
        .map(|id| assemble(id, 0, &by_id, &children_of))
        .collect();

    Hierarchy { roots, anomalies }
}

/// Walks each member's ancestor chain; any chain that revisits itself is a
/// cycle, cut by clearing the parent of its lowest-id member. Chains that
/// reach a root are memoized so each member is walked at most once.
fn cut_cycles(
    active: &[&MemberRecord],
    parent_of: &mut HashMap<Id<MemberRecord>, Option<Id<MemberRecord>>>,
    anomalies: &mut Vec<Anomaly>,
) {
    let mut grounded: HashSet<Id<MemberRecord>> = HashSet::new();

    for record in active {
        if grounded.contains(&record.id) {
            continue;
        }

        let mut path: Vec<Id<MemberRecord>> = Vec::new();
        let mut path_index: HashMap<Id<MemberRecord>, usize> = HashMap::new();
        let mut current = record.id;

        loop {
            if grounded.contains(&current) {
                break;
            }
            if let Some(&start) = path_index.get(&current) {
                // path[start..] is the cycle; every id in it is present,
                // so min() cannot fail.
                let cut = path[start..]
                    .iter()
                    .copied()
                    .min()
                    .unwrap_or(current);
                warn!("parent cycle detected, cutting at member {cut}");
                parent_of.insert(cut, None);
                anomalies.push(Anomaly::CycleCut { member: cut });
                break;
            }

            path_index.insert(current, path.len());
            path.push(current);
            match parent_of.get(&current).copied().flatten() {
                Some(next) => current = next,
                None => break,
            }
        }

        grounded.extend(path);
    }
}

fn assemble(
    id: Id<MemberRecord>,
    depth: u32,
    by_id: &HashMap<Id<MemberRecord>, &MemberRecord>,
    children_of: &HashMap<Id<MemberRecord>, Vec<Id<MemberRecord>>>,
) -> MemberNode {
    let children = children_of
        .get(&id)
        .map(|child_ids| {
            child_ids
                .iter()
                .map(|child_id| assemble(*child_id, depth + 1, by_id, children_of))
                .collect()
        })
        .unwrap_or_default();

    MemberNode {
        record: by_id[&id].clone(),
        children,
        depth,
    }
}
