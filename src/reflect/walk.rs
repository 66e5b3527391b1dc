use crate::avro::Schema;
use crate::describe::TypeDesc;
use crate::error::ReflectError;
use crate::reflect::report::{Degradation, DegradationKind, Report};

/// Per-call traversal state.
#[derive(Debug, Default)]
pub(crate) struct Walk {
    /// Records currently being expanded, outermost first. Identity is the
    /// whole description: two records sharing a name but not a shape are
    /// distinct types.
    record_stack: Vec<TypeDesc>,
    path: Vec<String>,
    degradations: Vec<Degradation>,
}

impl Walk {
    pub(crate) fn enter_record(&mut self, ty: &TypeDesc) -> Result<(), ReflectError> {
        if self.record_stack.iter().any(|open| open == ty) {
            let mut chain: Vec<String> = self
                .record_stack
                .iter()
                .map(|open| open.name().to_string())
                .collect();
            chain.push(ty.name().to_string());
            return Err(ReflectError::CyclicType {
                name: ty.name().to_string(),
                chain,
            });
        }
        self.record_stack.push(ty.clone());
        Ok(())
    }

    pub(crate) fn leave_record(&mut self) {
        self.record_stack.pop();
    }

    pub(crate) fn enter(&mut self, segment: &str) {
        self.path.push(segment.to_string());
    }

    pub(crate) fn leave(&mut self) {
        self.path.pop();
    }

    pub(crate) fn degrade(&mut self, kind: DegradationKind) {
        let degradation = Degradation {
            path: self.path(),
            kind,
        };
        tracing::debug!("{degradation}");
        self.degradations.push(degradation);
    }

    fn path(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            if !out.is_empty() && !segment.starts_with(|c: char| c == '[' || c == '{') {
                out.push('.');
            }
            out.push_str(segment);
        }
        out
    }

    pub(crate) fn finish(self, schema: Schema) -> Report {
        Report {
            schema,
            degradations: self.degradations,
        }
    }
}
