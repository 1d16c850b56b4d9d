//! Illumination state of the Tree and connected-component analysis.
//!
//! A sphere is illuminated when a planet occupies it. An edge between two
//! illuminated spheres is connected; with one lit endpoint it reaches
//! into the dark (to_unlit); with neither it is isolated. The largest
//! connected component is found by traversal of the 11-node graph restricted
//! to connected edges.

use serde::{Deserialize, Serialize};

use arcana_chart::Planet;

use crate::path::PathDef;
use crate::sephirah::{ALL_SEPHIROTH, Sephirah, planet_sephirah};

/// A set of sephiroth as an 11-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SephirahSet(u16);

impl SephirahSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, s: Sephirah) -> bool {
        self.0 & (1 << s.index()) != 0
    }

    pub const fn insert(self, s: Sephirah) -> Self {
        Self(self.0 | (1 << s.index()))
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in descent order.
    pub fn iter(self) -> impl Iterator<Item = Sephirah> {
        ALL_SEPHIROTH.into_iter().filter(move |s| self.contains(*s))
    }
}

/// Spheres illuminated by a set of planets.
pub fn illuminated_sephiroth(planets: &[Planet]) -> SephirahSet {
    planets
        .iter()
        .fold(SephirahSet::empty(), |set, &p| set.insert(planet_sephirah(p)))
}

/// Illumination state of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeState {
    /// Both endpoints illuminated.
    Connected,
    /// Exactly one endpoint illuminated.
    ToUnlit,
    /// Neither endpoint illuminated.
    Isolated,
}

/// A candidate path with its classified state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedEdge {
    pub path: &'static PathDef,
    pub state: EdgeState,
}

/// Classify candidate paths against the illuminated set.
pub fn classify_edges(paths: &[&'static PathDef], lit: SephirahSet) -> Vec<ClassifiedEdge> {
    paths
        .iter()
        .map(|&path| {
            let lit_ends =
                u8::from(lit.contains(path.from)) + u8::from(lit.contains(path.to));
            let state = match lit_ends {
                2 => EdgeState::Connected,
                1 => EdgeState::ToUnlit,
                _ => EdgeState::Isolated,
            };
            ClassifiedEdge { path, state }
        })
        .collect()
}

/// A connected subgraph of the Tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    /// Member spheres in descent order.
    pub nodes: Vec<Sephirah>,
    /// Connected edges with both endpoints in `nodes`.
    pub edges: Vec<&'static PathDef>,
}

/// The largest connected component of illuminated spheres joined by
/// connected edges.
///
/// Components are discovered in descent order; a size tie keeps the
/// first one encountered. Illuminated spheres with no connected edges
/// form singleton components.
pub fn largest_component(lit: SephirahSet, edges: &[ClassifiedEdge]) -> Component {
    let mut adjacency: [u16; 11] = [0; 11];
    for e in edges {
        if e.state == EdgeState::Connected {
            adjacency[e.path.from.index() as usize] |= 1 << e.path.to.index();
            adjacency[e.path.to.index() as usize] |= 1 << e.path.from.index();
        }
    }

    let mut visited = SephirahSet::empty();
    let mut best = SephirahSet::empty();
    for start in ALL_SEPHIROTH {
        if !lit.contains(start) || visited.contains(start) {
            continue;
        }
        // flood from this sphere
        let mut component = SephirahSet::empty().insert(start);
        let mut queue = vec![start];
        while let Some(node) = queue.pop() {
            let neighbors = adjacency[node.index() as usize];
            for next in ALL_SEPHIROTH {
                if neighbors & (1 << next.index()) != 0 && !component.contains(next) {
                    component = component.insert(next);
                    queue.push(next);
                }
            }
        }
        for s in component.iter() {
            visited = visited.insert(s);
        }
        if component.len() > best.len() {
            best = component;
        }
    }

    let edges_within = edges
        .iter()
        .filter(|e| {
            e.state == EdgeState::Connected
                && best.contains(e.path.from)
                && best.contains(e.path.to)
        })
        .map(|e| e.path)
        .collect();

    Component {
        nodes: best.iter().collect(),
        edges: edges_within,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{ALL_PATHS, path_between};

    fn refs(paths: &[&'static PathDef]) -> Vec<&'static PathDef> {
        paths.to_vec()
    }

    #[test]
    fn set_basics() {
        let set = SephirahSet::empty()
            .insert(Sephirah::Tiphereth)
            .insert(Sephirah::Netzach);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Sephirah::Tiphereth));
        assert!(!set.contains(Sephirah::Kether));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Sephirah::Tiphereth, Sephirah::Netzach]
        );
    }

    #[test]
    fn illumination_from_planets() {
        let lit = illuminated_sephiroth(&[Planet::Sun, Planet::Venus]);
        assert!(lit.contains(Sephirah::Tiphereth));
        assert!(lit.contains(Sephirah::Netzach));
        assert_eq!(lit.len(), 2);
    }

    #[test]
    fn edge_classification_states() {
        let lit = illuminated_sephiroth(&[Planet::Sun, Planet::Venus]);
        let sun_venus = path_between(Sephirah::Tiphereth, Sephirah::Netzach).unwrap();
        let to_dark = path_between(Sephirah::Tiphereth, Sephirah::Yesod).unwrap();
        let dark = path_between(Sephirah::Hod, Sephirah::Malkuth).unwrap();
        let classified = classify_edges(&refs(&[sun_venus, to_dark, dark]), lit);
        assert_eq!(classified[0].state, EdgeState::Connected);
        assert_eq!(classified[1].state, EdgeState::ToUnlit);
        assert_eq!(classified[2].state, EdgeState::Isolated);
    }

    /// {Tiphereth, Netzach} with their path form the whole largest
    /// component.
    #[test]
    fn two_sphere_component() {
        let lit = SephirahSet::empty()
            .insert(Sephirah::Tiphereth)
            .insert(Sephirah::Netzach);
        let path = path_between(Sephirah::Tiphereth, Sephirah::Netzach).unwrap();
        let classified = classify_edges(&refs(&[path]), lit);
        assert_eq!(classified[0].state, EdgeState::Connected);
        let comp = largest_component(lit, &classified);
        assert_eq!(comp.nodes, vec![Sephirah::Tiphereth, Sephirah::Netzach]);
        assert_eq!(comp.edges, vec![path]);
    }

    #[test]
    fn component_nodes_subset_of_lit() {
        let lit = illuminated_sephiroth(&[
            Planet::Sun,
            Planet::Moon,
            Planet::Mercury,
            Planet::Venus,
        ]);
        let all: Vec<&'static PathDef> = ALL_PATHS.iter().collect();
        let classified = classify_edges(&all, lit);
        let comp = largest_component(lit, &classified);
        for n in &comp.nodes {
            assert!(lit.contains(*n));
        }
        for e in &comp.edges {
            assert!(comp.nodes.contains(&e.from));
            assert!(comp.nodes.contains(&e.to));
        }
    }

    #[test]
    fn disconnected_picks_larger() {
        // Kether+Chokmah joined (Aleph); Netzach+Hod+Yesod joined
        // (Peh, Tzaddi, Resh) — the triad wins.
        let lit = SephirahSet::empty()
            .insert(Sephirah::Kether)
            .insert(Sephirah::Chokmah)
            .insert(Sephirah::Netzach)
            .insert(Sephirah::Hod)
            .insert(Sephirah::Yesod);
        let all: Vec<&'static PathDef> = ALL_PATHS.iter().collect();
        let classified = classify_edges(&all, lit);
        let comp = largest_component(lit, &classified);
        assert_eq!(
            comp.nodes,
            vec![Sephirah::Netzach, Sephirah::Hod, Sephirah::Yesod]
        );
    }

    #[test]
    fn tie_keeps_first_encountered() {
        // Two pairs of equal size; Kether-Chokmah is encountered first.
        let lit = SephirahSet::empty()
            .insert(Sephirah::Kether)
            .insert(Sephirah::Chokmah)
            .insert(Sephirah::Yesod)
            .insert(Sephirah::Malkuth);
        let all: Vec<&'static PathDef> = ALL_PATHS.iter().collect();
        let classified = classify_edges(&all, lit);
        let comp = largest_component(lit, &classified);
        assert_eq!(comp.nodes, vec![Sephirah::Kether, Sephirah::Chokmah]);
    }

    #[test]
    fn empty_lit_empty_component() {
        let all: Vec<&'static PathDef> = ALL_PATHS.iter().collect();
        let classified = classify_edges(&all, SephirahSet::empty());
        let comp = largest_component(SephirahSet::empty(), &classified);
        assert!(comp.nodes.is_empty());
        assert!(comp.edges.is_empty());
    }

    #[test]
    fn singleton_when_no_edges() {
        let lit = SephirahSet::empty().insert(Sephirah::Tiphereth);
        let comp = largest_component(lit, &[]);
        assert_eq!(comp.nodes, vec![Sephirah::Tiphereth]);
        assert!(comp.edges.is_empty());
    }
}
