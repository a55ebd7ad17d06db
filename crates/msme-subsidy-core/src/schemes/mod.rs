pub mod compare;
pub mod resolver;

pub use compare::{
    compare_schemes, evaluate_candidate, ComparisonOutput, SchemeBenefit, SchemeCandidate,
};
pub use resolver::{
    resolve_and_compare, resolve_candidates, ApplicantProfile, PolicyFormat, PolicyTable,
    ResolutionOutput, SchemePolicy,
};
