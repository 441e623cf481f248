// path.rs — Taxonomy path value type and the generic segment-tree engine.
//
// Every CADF taxonomy (actions, resource types, outcomes) is a closed tree
// of named segments. This module holds the one engine shared by all of
// them: a static tree of `Node`s describes the vocabulary, `resolve` walks
// an input string against it, and `enumerate` lists every reachable
// spelling. Encode and decode both read the same tree, so the two
// vocabularies cannot drift apart.

use std::fmt;

use serde::Serialize;

/// A validated slash-delimited taxonomy path, e.g. `compute/machine/vm`.
///
/// The canonical form has no leading or trailing slash and is
/// case-sensitive. Equality and hashing are by path value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaxonomyPath {
    path: String,
}

impl TaxonomyPath {
    pub(crate) fn root(segment: &str) -> Self {
        Self {
            path: segment.to_string(),
        }
    }

    pub(crate) fn from_segments(segments: &[&str]) -> Self {
        Self {
            path: segments.join("/"),
        }
    }

    /// Extend this path with one more segment.
    pub(crate) fn child(&self, segment: &str) -> Self {
        Self {
            path: format!("{}/{}", self.path, segment),
        }
    }

    /// The canonical `/`-joined string.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The ordered segments of this path, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/')
    }
}

impl fmt::Display for TaxonomyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// One node in a taxonomy tree.
///
/// `segment` is the serialized (canonical) spelling. `decode_alias` is an
/// alternative spelling accepted on decode only — it covers the two places
/// where the external vocabulary diverges from the serialized literal
/// (`monitor` for `capture`, `terminated` for `terminate`). A `recursive`
/// node accepts itself as its own child any number of times
/// (`data/template/stack/stack/...`).
pub(crate) struct Node {
    pub segment: &'static str,
    pub decode_alias: Option<&'static str>,
    pub children: &'static [Node],
    pub recursive: bool,
}

impl Node {
    pub const fn leaf(segment: &'static str) -> Self {
        Self {
            segment,
            decode_alias: None,
            children: &[],
            recursive: false,
        }
    }

    pub const fn internal(segment: &'static str, children: &'static [Node]) -> Self {
        Self {
            segment,
            decode_alias: None,
            children,
            recursive: false,
        }
    }

    pub const fn aliased(
        segment: &'static str,
        decode_alias: &'static str,
        children: &'static [Node],
    ) -> Self {
        Self {
            segment,
            decode_alias: Some(decode_alias),
            children,
            recursive: false,
        }
    }

    /// A leaf that may descend into itself repeatedly.
    pub const fn re_entrant(segment: &'static str) -> Self {
        Self {
            segment,
            decode_alias: None,
            children: &[],
            recursive: true,
        }
    }

    fn matches(&self, segment: &str) -> bool {
        self.segment == segment || self.decode_alias.is_some_and(|alias| alias == segment)
    }
}

/// Replay `input` against the tree and return the canonical path it
/// resolves to.
///
/// Either the whole string resolves to exactly one node or the walk fails;
/// there is no partial-match success. Alias spellings are accepted at any
/// position, but the returned path always uses the canonical segments.
pub(crate) fn resolve(roots: &'static [Node], input: &str) -> Option<TaxonomyPath> {
    let mut segments = input.split('/');
    let first = segments.next()?;
    let mut node = roots.iter().find(|n| n.matches(first))?;
    let mut canonical = vec![node.segment];

    for segment in segments {
        let next = if node.recursive && node.matches(segment) {
            node
        } else {
            node.children.iter().find(|n| n.matches(segment))?
        };
        canonical.push(next.segment);
        node = next;
    }

    Some(TaxonomyPath::from_segments(&canonical))
}

/// Every (spelling, canonical path) pair reachable in the tree.
///
/// Visits each node exactly once — a recursive node contributes its first
/// occurrence only; deeper re-entrant paths are handled by `resolve`. A
/// node with aliased ancestors contributes one pair per spelling, all
/// mapping to the same canonical path.
pub(crate) fn enumerate(roots: &'static [Node]) -> Vec<(String, TaxonomyPath)> {
    let mut out = Vec::new();
    let root_prefix = [Vec::new()];
    for root in roots {
        visit(root, &[], &root_prefix, &mut out);
    }
    out
}

fn visit(
    node: &'static Node,
    canonical_prefix: &[&'static str],
    spelling_prefixes: &[Vec<&'static str>],
    out: &mut Vec<(String, TaxonomyPath)>,
) {
    let mut canonical: Vec<&'static str> = canonical_prefix.to_vec();
    canonical.push(node.segment);

    let mut spellings: Vec<Vec<&'static str>> = Vec::new();
    for prefix in spelling_prefixes {
        let mut with_segment = prefix.clone();
        with_segment.push(node.segment);
        spellings.push(with_segment);
        if let Some(alias) = node.decode_alias {
            let mut with_alias = prefix.clone();
            with_alias.push(alias);
            spellings.push(with_alias);
        }
    }

    let path = TaxonomyPath::from_segments(&canonical);
    for spelling in &spellings {
        out.push((spelling.join("/"), path.clone()));
    }

    for child in node.children {
        visit(child, &canonical, &spellings, out);
    }
}
