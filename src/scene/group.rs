use crate::scene::element::ElementId;

/// Ordered set of elements that share a lifecycle (created, moved and faded together).
///
/// Groups are flat: nesting is expressed by concatenation, the way scenes build a title,
/// a chart and its labels into one fade-out target.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Group(Vec<ElementId>);

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: ElementId) {
        if !self.0.contains(&id) {
            self.0.push(id);
        }
    }

    pub fn extend(&mut self, other: &Group) {
        for &id in &other.0 {
            self.push(id);
        }
    }

    pub fn concat<'a>(groups: impl IntoIterator<Item = &'a Group>) -> Self {
        let mut out = Self::new();
        for g in groups {
            out.extend(g);
        }
        out
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ElementId> for Group {
    fn from(id: ElementId) -> Self {
        Self(vec![id])
    }
}

impl From<&Group> for Group {
    fn from(g: &Group) -> Self {
        g.clone()
    }
}

impl FromIterator<ElementId> for Group {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        let mut out = Self::new();
        for id in iter {
            out.push(id);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/group.rs"]
mod tests;
