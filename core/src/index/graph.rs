use std::collections::{HashMap, HashSet, VecDeque};

use crate::model::PackageId;

/// Tracks import edges between packages so the pipeline can visit — and
/// publish into the [`super::GlobalIndex`] — every package only after all
/// of its imports.
#[derive(Debug, Default)]
pub struct PackageGraph {
    // package -> packages it imports
    imports: HashMap<PackageId, HashSet<PackageId>>,
    // package -> packages that import it
    importers: HashMap<PackageId, HashSet<PackageId>>,
    known: HashSet<PackageId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCycleError {
    pub cycle: Vec<PackageId>,
}

impl PackageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_package(&mut self, package: PackageId) {
        self.known.insert(package);
    }

    /// Records that `from` imports `to`.
    pub fn add_import(&mut self, from: PackageId, to: PackageId) {
        self.known.insert(from.clone());
        self.known.insert(to.clone());
        self.imports.entry(from.clone()).or_default().insert(to.clone());
        self.importers.entry(to).or_default().insert(from);
    }

    /// Kahn's algorithm: packages with no unresolved imports come first.
    /// The returned order guarantees that by the time a package is
    /// reached, every package it imports already precedes it.
    pub fn topological_order(&self) -> Result<Vec<PackageId>, ImportCycleError> {
        let mut in_degree: HashMap<PackageId, usize> = self
            .known
            .iter()
            .map(|p| (p.clone(), self.imports.get(p).map_or(0, HashSet::len)))
            .collect();

        let mut ready: VecDeque<PackageId> = in_degree
            .iter()
            .filter(|(_, &deg)| deg == 0)
            .map(|(p, _)| p.clone())
            .collect();
        let mut ready_sorted: Vec<PackageId> = ready.drain(..).collect();
        ready_sorted.sort();
        let mut ready: VecDeque<PackageId> = ready_sorted.into();

        let mut order = Vec::with_capacity(self.known.len());
        while let Some(pkg) = ready.pop_front() {
            order.push(pkg.clone());
            if let Some(dependents) = self.importers.get(&pkg) {
                let mut newly_ready = Vec::new();
                for dependent in dependents {
                    if let Some(deg) = in_degree.get_mut(dependent) {
                        *deg -= 1;
                        if *deg == 0 {
                            newly_ready.push(dependent.clone());
                        }
                    }
                }
                newly_ready.sort();
                for p in newly_ready {
                    ready.push_back(p);
                }
            }
        }

        if order.len() != self.known.len() {
            let cycle = self.known.iter().filter(|p| !order.contains(p)).cloned().collect();
            return Err(ImportCycleError { cycle });
        }

        Ok(order)
    }
}
