use crate::phase::{ClassClosure, Closed, HasClosures, HasSubclasses, Linked, Raw};
use crate::{Schema, SchemaError};
use rustc_hash::FxHashSet;
use vgraph_model::{ClassId, HostObject};

impl Schema<Raw> {
    /// Discovers the direct subclasses of every class.
    pub fn link_subclasses(self) -> Schema<Linked> {
        let mut direct_subclasses = vec![Vec::new(); self.classes.len()];
        for (index, class) in self.classes.iter().enumerate() {
            for superclass in &class.direct_superclasses {
                let subclasses: &mut Vec<ClassId> = &mut direct_subclasses[superclass.index()];
                if !subclasses.contains(&ClassId::new(index)) {
                    subclasses.push(ClassId::new(index));
                }
            }
        }
        self.map_phase(|Raw| Linked { direct_subclasses })
    }
}

impl Schema<Linked> {
    /// Computes the transitive super- and subclass closures of every class.
    ///
    /// Fails if a class is its own indirect superclass.
    pub fn compute_closures(self) -> Result<Schema<Closed>, SchemaError> {
        let closures = self
            .classes()
            .map(|class| {
                let superclasses = saturate(class, |c| self.direct_superclasses(c));
                if superclasses[1..].contains(&class) {
                    return Err(SchemaError::CyclicHierarchy(
                        self.class_iri(class).as_str().to_owned(),
                    ));
                }
                Ok(ClassClosure {
                    superclasses_and_self: superclasses,
                    subclasses_and_self: saturate(class, |c| self.direct_subclasses(c)),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.map_phase(|linked| Closed { linked, closures }))
    }
}

/// Collects `start` followed by everything reachable from it through `next`, breadth first.
///
/// Terminates on cyclic input: a class reachable from itself shows up once more after `start`.
fn saturate<'a>(start: ClassId, next: impl Fn(ClassId) -> &'a [ClassId]) -> Vec<ClassId> {
    let mut result = vec![start];
    let mut visited = FxHashSet::default();
    let mut layer = vec![start];
    while !layer.is_empty() {
        let mut next_layer = Vec::new();
        for class in layer {
            for &reached in next(class) {
                if visited.insert(reached) {
                    result.push(reached);
                    next_layer.push(reached);
                }
            }
        }
        layer = next_layer;
    }
    result
}

impl<P: HasSubclasses> Schema<P> {
    pub fn direct_subclasses(&self, class: ClassId) -> &[ClassId] {
        &self.phase.direct_subclasses()[class.index()]
    }
}

impl<P: HasClosures> Schema<P> {
    /// Returns every transitive superclass of `class`, excluding `class` itself.
    pub fn indirect_superclasses(&self, class: ClassId) -> &[ClassId] {
        &self.closure(class).superclasses_and_self[1..]
    }

    /// Returns `class` followed by its indirect superclasses.
    pub fn indirect_superclasses_and_self(&self, class: ClassId) -> &[ClassId] {
        &self.closure(class).superclasses_and_self
    }

    /// Returns every transitive subclass of `class`, excluding `class` itself.
    pub fn indirect_subclasses(&self, class: ClassId) -> &[ClassId] {
        &self.closure(class).subclasses_and_self[1..]
    }

    /// Returns `class` followed by its indirect subclasses.
    pub fn indirect_subclasses_and_self(&self, class: ClassId) -> &[ClassId] {
        &self.closure(class).subclasses_and_self
    }

    /// Returns whether `class` is `ancestor` or one of its indirect subclasses.
    pub fn is_subclass_of(&self, class: ClassId, ancestor: ClassId) -> bool {
        self.indirect_superclasses_and_self(class).contains(&ancestor)
    }

    /// Returns the most specific class whose host type accepts `object`.
    ///
    /// Among all matching classes the one with the fewest indirect subclasses wins; ties go to
    /// the class declared first. The host type tests are host code and may panic.
    pub fn classify(&self, object: &HostObject) -> Option<ClassId> {
        self.most_specific(self.classes(), object)
    }

    fn most_specific(
        &self,
        candidates: impl Iterator<Item = ClassId>,
        object: &HostObject,
    ) -> Option<ClassId> {
        candidates
            .filter(|class| self.host_type(*class).is_instance(object))
            .min_by_key(|class| (self.indirect_subclasses(*class).len(), *class))
    }

    fn closure(&self, class: ClassId) -> &ClassClosure {
        &self.phase.closures()[class.index()]
    }
}
